#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{self, Request, Response};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use todo_api::config::Config;
use todo_api::db::{self, SqliteTodoStore, TodoStore};
use todo_api::error::StoreError;
use todo_api::models::{NewTodo, Todo, TodoChanges};
use todo_api::router;
use todo_api::state::AppState;
use tower::ServiceExt;

pub async fn memory_pool() -> SqlitePool {
    // One connection: every new in-memory connection is a fresh database.
    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "DATABASE_MAX_CONNECTIONS" => Some("1".to_string()),
        _ => None,
    })
    .expect("valid test config");

    let pool = db::connect(&config)
        .await
        .expect("Failed to create database");
    db::ensure_schema(&pool)
        .await
        .expect("Failed to create todos table");
    pool
}

pub async fn test_app(strict_not_found: bool) -> Router {
    let store = Arc::new(SqliteTodoStore::new(memory_pool().await));
    router(AppState::new(store, strict_not_found))
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (u16, Value) {
    let resp: Response<Body> = app.clone().oneshot(req).await.unwrap();
    let status = resp.status().as_u16();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn list_todos(app: &Router) -> Vec<Todo> {
    let (status, body) = send(app, empty_request("GET", "/todos")).await;
    assert_eq!(status, 200);
    serde_json::from_value(body["result"].clone()).unwrap()
}

/// Every call fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl TodoStore for UnreachableStore {
    async fn insert(&self, _todo: NewTodo) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get(&self, _id: &str) -> Result<Todo, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: &str, _changes: TodoChanges) -> Result<u64, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: &str) -> Result<u64, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
