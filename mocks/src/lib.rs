//! Mock implementations and test utilities for the task service
//!
//! This crate provides the testing infrastructure shared by the other crates:
//! - An in-memory TaskRepository with error injection
//! - Builders and fixtures for test data
//! - Random data generators and proptest strategies
//! - Contract test helpers

pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod repository;

pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use repository::MockTaskRepository;
