use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::db::TodoStore;
use crate::error::StoreError;
use crate::models::{NewTodo, Todo, TodoChanges};

#[derive(Clone)]
pub struct SqliteTodoStore {
    db: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn insert(&self, todo: NewTodo) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO todos (id, title, description, status, due_date) VALUES (?1, ?2, ?3, ?4, ?5)"
        )
        .bind(&todo.id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(&todo.status)
        .bind(todo.due_date)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, status, created_date, updated_date, due_date FROM todos"
        )
        .fetch_all(&self.db)
        .await?;

        Ok(todos)
    }

    async fn get(&self, id: &str) -> Result<Todo, StoreError> {
        let mut rows = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, status, created_date, updated_date, due_date FROM todos WHERE id = ?1"
        )
        .bind(id)
        .fetch_all(&self.db)
        .await?;

        match rows.len() {
            0 => Err(StoreError::NotFound),
            1 => Ok(rows.remove(0)),
            n => Err(StoreError::Ambiguous(n)),
        }
    }

    async fn update(&self, id: &str, changes: TodoChanges) -> Result<u64, StoreError> {
        let affected = sqlx::query(
            r#"
            UPDATE todos
            SET title = ?1,
                description = ?2,
                status = ?3,
                due_date = ?4,
                updated_date = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.status)
        .bind(changes.due_date)
        .bind(changes.updated_date)
        .bind(id)
        .execute(&self.db)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let affected = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();

        Ok(affected)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("select 1").execute(&self.db).await?;
        Ok(())
    }
}
