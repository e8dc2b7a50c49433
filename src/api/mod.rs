pub mod envelope;
pub mod extract;
pub mod logging;

use axum::extract::{Path, State};
use axum::middleware;
use axum::{Router, http::StatusCode, routing::get};
use chrono::Utc;
use tracing::{debug, error};

use crate::error::{AppError, OperationError, StoreError};
use crate::models::*;
use crate::state::AppState;

use self::envelope::{ApiResponse, Operation};
use self::extract::BindJson;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(get_todos).post(save_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> StatusCode {
    match state.store.ping().await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            error!("health check failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn save_todo(
    State(state): State<AppState>,
    body: Result<BindJson<SaveTodoRequest>, AppError>,
) -> Result<ApiResponse<()>, OperationError> {
    let op = Operation::SaveTodo;
    let BindJson(req) = body.map_err(|e| state.fail(op, e))?;

    // TODO: reject duplicate titles.
    let todo = NewTodo::from_request(req);
    debug!(id = %todo.id, "saving todo");

    state.store.insert(todo).await.map_err(|e| state.fail(op, e))?;

    Ok(ApiResponse::success(op, None))
}

async fn get_todos(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Todo>>, OperationError> {
    let op = Operation::GetTodos;
    let todos = state.store.list().await.map_err(|e| state.fail(op, e))?;
    Ok(ApiResponse::success(op, Some(todos)))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Todo>, OperationError> {
    let op = Operation::GetTodo;
    let todo = state.store.get(&id).await.map_err(|e| state.fail(op, e))?;
    Ok(ApiResponse::success(op, Some(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<BindJson<UpdateTodoRequest>, AppError>,
) -> Result<ApiResponse<()>, OperationError> {
    let op = Operation::UpdateTodo;
    let BindJson(req) = body.map_err(|e| state.fail(op, e))?;

    // The due date column only accepts RFC 3339; anything else is a store rejection.
    let changes = TodoChanges::from_request(req, Utc::now())
        .map_err(|e| state.fail(op, StoreError::InvalidDueDate(e)))?;

    let affected = state
        .store
        .update(&id, changes)
        .await
        .map_err(|e| state.fail(op, e))?;
    debug!(id = %id, affected, "updated todo");

    Ok(ApiResponse::success(op, None))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, OperationError> {
    let op = Operation::DeleteTodo;
    let affected = state
        .store
        .delete(&id)
        .await
        .map_err(|e| state.fail(op, e))?;
    debug!(id = %id, affected, "deleted todo");

    Ok(ApiResponse::success(op, None))
}
