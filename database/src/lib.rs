//! Database crate for the task service
//!
//! This crate provides the SQLite implementation of the TaskRepository
//! trait.
//!
//! # Features
//!
//! - File-backed SQLite with WAL mode and a busy timeout for concurrent writers
//! - Idempotent `CREATE TABLE IF NOT EXISTS` schema setup, no migrations
//! - Connection pooling through sqlx
//! - In-memory databases for tests
//!
//! # Usage
//!
//! ```rust
//! use database::SqliteTaskRepository;
//! use task_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTaskRepository::new(":memory:").await?;
//!
//!     // Create the tasks table
//!     repo.ensure_schema().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!     println!("Database is healthy!");
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from task-core for convenience
pub use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
};
