mod common;

use chrono::{TimeZone, Utc};
use todo_api::db::{SqliteTodoStore, TodoStore};
use todo_api::error::StoreError;
use todo_api::models::{NewTodo, SaveTodoRequest, TodoChanges};

use common::memory_pool;

fn new_todo(title: &str) -> NewTodo {
    NewTodo::from_request(SaveTodoRequest {
        title: title.to_string(),
        description: None,
        due_date: Some("2025-01-01T00:00:00Z".to_string()),
    })
}

#[tokio::test]
async fn insert_assigns_created_date_in_store() {
    let store = SqliteTodoStore::new(memory_pool().await);
    let todo = new_todo("Buy milk");
    let id = todo.id.clone();
    let before = Utc::now() - chrono::Duration::seconds(5);

    store.insert(todo).await.expect("insert");

    let saved = store.get(&id).await.expect("get");
    assert_eq!(saved.title, "Buy milk");
    assert_eq!(saved.status, "TODO");
    assert!(saved.created_date >= before);
    assert!(saved.updated_date.is_none());
    assert_eq!(
        saved.due_date,
        Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn insert_with_existing_id_fails() {
    let store = SqliteTodoStore::new(memory_pool().await);
    let todo = new_todo("first");

    store.insert(todo.clone()).await.expect("insert");
    let err = store.insert(todo).await.unwrap_err();

    assert!(matches!(err, StoreError::Database(_)));
}

#[tokio::test]
async fn get_missing_row_is_not_found() {
    let store = SqliteTodoStore::new(memory_pool().await);

    let err = store.get("nope").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn update_and_delete_report_affected_rows() {
    let store = SqliteTodoStore::new(memory_pool().await);
    let todo = new_todo("Walk dog");
    let id = todo.id.clone();
    store.insert(todo).await.expect("insert");

    let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
    let changes = TodoChanges {
        title: "Walk dog".to_string(),
        description: Some("around the block".to_string()),
        status: "DONE".to_string(),
        due_date: None,
        updated_date: now,
    };

    assert_eq!(store.update(&id, changes.clone()).await.unwrap(), 1);
    assert_eq!(store.update("missing", changes).await.unwrap(), 0);

    let saved = store.get(&id).await.unwrap();
    assert_eq!(saved.status, "DONE");
    assert_eq!(saved.description.as_deref(), Some("around the block"));
    assert_eq!(saved.updated_date, Some(now));
    assert!(saved.due_date.is_none());

    assert_eq!(store.delete(&id).await.unwrap(), 1);
    assert_eq!(store.delete(&id).await.unwrap(), 0);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn ping_succeeds_on_open_pool() {
    let store = SqliteTodoStore::new(memory_pool().await);
    store.ping().await.expect("ping");
}
