use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::envelope::{ApiResponse, Operation};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no todo matched")]
    NotFound,

    #[error("expected exactly one todo, matched {0}")]
    Ambiguous(usize),

    #[error("invalid dueDate: {0}")]
    InvalidDueDate(#[from] chrono::ParseError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Zero-row lookups only surface as 404 in strict mode; otherwise every
    /// store failure collapses into 500.
    pub fn status(&self, strict_not_found: bool) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound) if strict_not_found => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(false), self.to_string()).into_response()
    }
}

/// A failure tied to the operation that produced it. Renders as the
/// response envelope with the operation's failure message.
#[derive(Debug, Error)]
#[error("{operation} error: {source}")]
pub struct OperationError {
    pub operation: Operation,
    pub status: StatusCode,
    pub source: AppError,
}

impl OperationError {
    pub fn new(operation: Operation, source: AppError, strict_not_found: bool) -> Self {
        Self {
            operation,
            status: source.status(strict_not_found),
            source,
        }
    }
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        match &self.source {
            AppError::BadRequest(cause) => {
                warn!(operation = self.operation.tag(), cause = %cause, "request rejected");
            }
            AppError::Store(cause) => {
                error!(operation = self.operation.tag(), cause = %cause, "store error");
            }
        }

        ApiResponse::<()>::failure(self.operation, self.status).into_response()
    }
}
