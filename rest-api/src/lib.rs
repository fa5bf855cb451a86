//! Task REST API
//!
//! This crate provides the axum HTTP layer of the task service. It exposes
//! CRUD routes over any [`TaskRepository`] implementation:
//!
//! - `POST /tasks` - create a task (201)
//! - `GET /tasks` - list all tasks in insertion order
//! - `GET /tasks/:id` - fetch one task (404 if absent)
//! - `PATCH /tasks/:id` - overwrite the fields present in the body
//! - `DELETE /tasks/:id` - remove a task (204)
//! - `GET /ping` - liveness check
//! - `GET /health` - readiness check including the database
//!
//! Validation failures become 422, missing rows 404 and anything else a
//! generic 500.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use task_api::TaskApiServer;
//! # use task_core::{error::Result, NewTask, Task, TaskRepository, UpdateTask};
//! # use async_trait::async_trait;
//! # struct MyRepo;
//! # #[async_trait]
//! # impl TaskRepository for MyRepo {
//! #     async fn create(&self, _task: NewTask) -> Result<Task> { unimplemented!() }
//! #     async fn get_by_id(&self, _id: i64) -> Result<Option<Task>> { unimplemented!() }
//! #     async fn list(&self) -> Result<Vec<Task>> { unimplemented!() }
//! #     async fn update(&self, _id: i64, _updates: UpdateTask) -> Result<Task> { unimplemented!() }
//! #     async fn delete(&self, _id: i64) -> Result<()> { unimplemented!() }
//! #     async fn health_check(&self) -> Result<()> { unimplemented!() }
//! # }
//!
//! async fn start_server() -> std::io::Result<()> {
//!     // In real usage, this is database::SqliteTaskRepository
//!     let repository = Arc::new(MyRepo);
//!     let server = TaskApiServer::new(repository);
//!     let addr = "127.0.0.1:8000".parse().unwrap();
//!     server.serve(addr, std::future::pending()).await
//! }
//! ```

pub mod error;
pub mod handler;
pub mod request_logger;
pub mod server;

// Re-export key types for easier usage
pub use error::ApiError;
pub use handler::{HealthStatus, TaskHandler};
pub use server::{create_router, TaskApiServer};

// Re-export core types for external consumers
pub use task_core::{NewTask, Task, TaskRepository, UpdateTask};
