use std::sync::Arc;

use crate::api::envelope::Operation;
use crate::db::TodoStore;
use crate::error::{AppError, OperationError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub strict_not_found: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, strict_not_found: bool) -> Self {
        Self {
            store,
            strict_not_found,
        }
    }

    pub fn fail(&self, operation: Operation, err: impl Into<AppError>) -> OperationError {
        OperationError::new(operation, err.into(), self.strict_not_found)
    }
}
