//! Task Core Library
//!
//! This crate provides the domain models, error types and the repository
//! trait for the task service. The database, HTTP and server crates all
//! depend on the types defined here.
//!
//! # Architecture
//!
//! - [`models`] - Domain models (Task, NewTask, UpdateTask)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//! - [`validation`] - Payload validation
//!
//! # Example
//!
//! ```rust
//! use task_core::{models::NewTask, validation::TaskValidator};
//!
//! let new_task = NewTask::new("Buy milk", None).normalized();
//!
//! // Validate the task before creation
//! TaskValidator::validate_new_task(&new_task).unwrap();
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{NewTask, Task, UpdateTask};
pub use repository::TaskRepository;
pub use validation::TaskValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
