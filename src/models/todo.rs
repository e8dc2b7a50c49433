use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status every todo starts in. Updates may overwrite it with any string.
pub const INITIAL_STATUS: &str = "TODO";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<String>,
}

/// Row handed to the store on insert. `created_date` is left to the store.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
}

/// Full replacement of the mutable columns of a todo.
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<DateTime<Utc>>,
    pub updated_date: DateTime<Utc>,
}

impl NewTodo {
    /// Builds a fresh row with a new v4 id and the initial status.
    ///
    /// An unparseable due date is dropped instead of rejected.
    pub fn from_request(req: SaveTodoRequest) -> Self {
        let due_date = parse_due_date(req.due_date.as_deref()).unwrap_or(None);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: req.title,
            description: req.description,
            status: INITIAL_STATUS.to_string(),
            due_date,
        }
    }
}

impl TodoChanges {
    pub fn from_request(
        req: UpdateTodoRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, chrono::ParseError> {
        let due_date = parse_due_date(req.due_date.as_deref())?;

        Ok(Self {
            title: req.title,
            description: req.description,
            status: req.status,
            due_date,
            updated_date: now,
        })
    }
}

/// Parses an RFC 3339 date-time. Missing or blank input means "no date".
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))),
    }
}
