//! Mock implementation of TaskRepository trait
//!
//! Provides a thread-safe in-memory repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - The same validation and not-found behavior as the SQLite repository

use std::collections::BTreeMap;
use std::sync::{Arc, atomic::{AtomicI64, Ordering}};
use parking_lot::Mutex;
use async_trait::async_trait;
use chrono::Utc;
use task_core::{
    NewTask, Result, Task, TaskError, TaskRepository, TaskValidator, UpdateTask,
};

/// Mock implementation of TaskRepository for testing
///
/// IDs are handed out from a counter that never goes backwards, so deleted
/// IDs are not reused, matching SQLite `AUTOINCREMENT`.
pub struct MockTaskRepository {
    tasks: Arc<Mutex<BTreeMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Create mock repository with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        let task_map = tasks.into_iter().map(|t| (t.id, t)).collect();

        Self {
            tasks: Arc::new(Mutex::new(task_map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock repository with specific starting ID
    pub fn with_next_id(next_id: i64) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(next_id)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject error for next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.starts_with(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Assert method was never called
    pub fn assert_not_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            !history.iter().any(|call| call.starts_with(method)),
            "Method '{}' was called unexpectedly. Call history: {:?}",
            method,
            *history
        );
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        let mut error_opt = self.error_injection.lock();
        if let Some(error) = error_opt.take() {
            return Err(error);
        }
        Ok(())
    }

    /// Record method call in history
    fn record_call(&self, method: &str) {
        self.call_history.lock().push(format!("{method}()"));
    }

    /// Record method call with parameters in history
    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        self.record_call_with_params("create", &format!("title={}", task.title));
        self.check_error_injection()?;

        let task = task.normalized();
        TaskValidator::validate_new_task(&task)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let new_task = Task {
            id,
            title: task.title,
            description: task.description,
            done: task.done,
            created_at: Utc::now(),
        };

        self.tasks.lock().insert(id, new_task.clone());
        Ok(new_task)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.record_call_with_params("get_by_id", &format!("id={id}"));
        self.check_error_injection()?;

        Ok(self.tasks.lock().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        self.record_call("list");
        self.check_error_injection()?;

        Ok(self.tasks.lock().values().cloned().collect())
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task> {
        self.record_call_with_params("update", &format!("id={id}"));
        self.check_error_injection()?;

        let updates = updates.normalized();
        TaskValidator::validate_update_task(&updates)?;

        let mut tasks = self.tasks.lock();
        let task = tasks.get_mut(&id).ok_or_else(|| TaskError::not_found_id(id))?;
        task.apply(&updates);

        Ok(task.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record_call_with_params("delete", &format!("id={id}"));
        self.check_error_injection()?;

        self.tasks
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TaskError::not_found_id(id))
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");
        self.check_error_injection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_tasks_continues_numbering() {
        let existing = Task {
            id: 10,
            title: "Seeded".to_string(),
            description: None,
            done: false,
            created_at: Utc::now(),
        };
        let repo = MockTaskRepository::with_tasks(vec![existing]);

        let created = repo.create(NewTask::new("Next", None)).await.unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(repo.task_count(), 2);
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed() {
        let repo = MockTaskRepository::new();
        repo.inject_error(TaskError::Database("offline".to_string()));

        assert!(repo.list().await.unwrap_err().is_database());
        assert!(repo.list().await.is_ok());
    }

    #[tokio::test]
    async fn test_call_history_tracking() {
        let repo = MockTaskRepository::new();
        repo.health_check().await.unwrap();
        let _ = repo.delete(3).await;

        assert_eq!(repo.call_history(), vec!["health_check()", "delete(id=3)"]);
        repo.assert_called("delete");
        repo.assert_not_called("update");

        repo.clear_history();
        assert!(repo.call_history().is_empty());
    }
}
