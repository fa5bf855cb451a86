//! Task Server Library
//!
//! Configuration management, logging setup and startup wiring for the task
//! HTTP service. The `task-server` binary is a thin shell around these.

pub mod config;
pub mod setup;
pub mod telemetry;

pub use config::Config;
pub use setup::{create_repository, create_server, ensure_database_directory, initialize_app, App};
pub use telemetry::init_telemetry;
