use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The five todo operations, each with its own log tag and outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SaveTodo,
    GetTodos,
    GetTodo,
    UpdateTodo,
    DeleteTodo,
}

impl Operation {
    pub fn tag(self) -> &'static str {
        match self {
            Operation::SaveTodo => "saveTodo",
            Operation::GetTodos => "getTodos",
            Operation::GetTodo => "getTodo",
            Operation::UpdateTodo => "updateTodo",
            Operation::DeleteTodo => "deleteTodo",
        }
    }

    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::SaveTodo => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Operation::SaveTodo => "Success save todo",
            Operation::GetTodos => "Success get todos",
            Operation::GetTodo => "Success get todo",
            Operation::UpdateTodo => "Success update todo",
            Operation::DeleteTodo => "Success delete todo",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::SaveTodo => "Failed to save todo",
            Operation::GetTodos => "Failed to get todos",
            Operation::GetTodo => "Failed to get todo",
            Operation::UpdateTodo => "Failed to update todo",
            Operation::DeleteTodo => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Uniform `{status, message, result}` body. `status` mirrors the HTTP status.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(operation: Operation, result: Option<T>) -> Self {
        Self {
            status: operation.success_status().as_u16(),
            message: operation.success_message().to_string(),
            result,
        }
    }

    pub fn failure(operation: Operation, status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            message: operation.failure_message().to_string(),
            result: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
