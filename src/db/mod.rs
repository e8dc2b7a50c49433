pub mod repository;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::Config;
use crate::error::StoreError;
use crate::models::{NewTodo, Todo, TodoChanges};

pub use repository::SqliteTodoStore;

/// Persistence for todos. Every method issues a single statement.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn insert(&self, todo: NewTodo) -> Result<(), StoreError>;

    /// All rows in store order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Fails unless exactly one row matches `id`.
    async fn get(&self, id: &str) -> Result<Todo, StoreError>;

    /// Overwrites every mutable column. Returns affected rows, zero included.
    async fn update(&self, id: &str, changes: TodoChanges) -> Result<u64, StoreError>;

    /// Returns affected rows, zero included.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

/// Creates the `todos` table when it is missing.
pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            status TEXT NOT NULL,
            created_date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_date TEXT,
            due_date TEXT
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}
