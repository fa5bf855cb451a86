use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use task_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Column list shared by every statement that returns a task
pub const TASK_COLUMNS: &str = "id, title, description, done, created_at";

/// Idempotent schema for the single tasks table.
///
/// `AUTOINCREMENT` keeps SQLite from reusing the ID of a deleted row.
pub const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    done BOOLEAN NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
)
"#;

/// Convert SQLite row to Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(sqlx_error_to_task_error)?;

    Ok(Task {
        id: row.try_get("id").map_err(sqlx_error_to_task_error)?,
        title: row.try_get("title").map_err(sqlx_error_to_task_error)?,
        description: row
            .try_get("description")
            .map_err(sqlx_error_to_task_error)?,
        done: row.try_get("done").map_err(sqlx_error_to_task_error)?,
        created_at,
    })
}

/// Convert SQLx error to TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // Lookups use fetch_optional, so this only fires on an unexpected miss
            TaskError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::ColumnDecode { index, source } => {
            TaskError::Database(format!("Failed to decode column {index}: {source}"))
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::PoolClosed => TaskError::Database("Connection pool closed".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}
