//! Task Handler
//!
//! Bridges HTTP operations to a TaskRepository. Payloads are normalized and
//! validated here, before any repository call is made.

use serde::Serialize;
use std::sync::Arc;
use task_core::{
    error::Result, NewTask, Task, TaskError, TaskRepository, TaskValidator, UpdateTask,
};

/// Readiness report returned by `GET /health`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            database: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: "unavailable".to_string(),
            database: "error".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Task handler that issues exactly one repository operation per call
pub struct TaskHandler<R> {
    repository: Arc<R>,
}

impl<R> Clone for TaskHandler<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R> TaskHandler<R> {
    /// Create new task handler
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a clone of the repository Arc
    pub fn repository(&self) -> Arc<R> {
        self.repository.clone()
    }
}

impl<R: TaskRepository> TaskHandler<R> {
    pub async fn create_task(&self, task: NewTask) -> Result<Task> {
        let task = task.normalized();
        TaskValidator::validate_new_task(&task)?;

        self.repository.create(task).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.repository.list().await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| TaskError::not_found_id(id))
    }

    pub async fn update_task(&self, id: i64, updates: UpdateTask) -> Result<Task> {
        let updates = updates.normalized();
        TaskValidator::validate_update_task(&updates)?;

        self.repository.update(id, updates).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }

    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.repository.health_check().await?;
        Ok(HealthStatus::healthy())
    }
}
