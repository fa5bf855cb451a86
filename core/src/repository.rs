use async_trait::async_trait;
use crate::{
    error::Result,
    models::{NewTask, Task, UpdateTask},
};

/// Repository trait for task persistence and retrieval operations
///
/// Each method is one unit of work against the store. Implementations must
/// be thread-safe and support concurrent access.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    ///
    /// # Arguments
    /// * `task` - The new task data to create
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with assigned ID and timestamp
    /// * `Err(TaskError::Validation)` - If the task data is invalid
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Get a task by its numeric ID
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn get_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// List every task in insertion order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Update an existing task
    ///
    /// # Arguments
    /// * `id` - The task ID to update
    /// * `updates` - The fields to update (only present fields are written)
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    /// * `Err(TaskError::Validation)` - If the update data is invalid
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task>;

    /// Delete a task permanently
    ///
    /// # Returns
    /// * `Ok(())` - The row was removed
    /// * `Err(TaskError::NotFound)` - If the task doesn't exist
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<()>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TaskError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
