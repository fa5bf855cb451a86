//! Standard test fixtures for consistent testing

use chrono::Utc;
use task_core::{NewTask, Task, UpdateTask};

/// Create a basic test task with sensible defaults
pub fn create_test_task() -> Task {
    Task {
        id: 1,
        title: "Test Task".to_string(),
        description: Some("A standard test task with default values".to_string()),
        done: false,
        created_at: Utc::now(),
    }
}

/// Create multiple unique tasks, every third one completed
pub fn create_test_tasks(count: usize) -> Vec<Task> {
    (1..=count)
        .map(|i| Task {
            id: i as i64,
            title: format!("Test Task {i}"),
            description: Some(format!("Test task number {i} for bulk testing")),
            done: i % 3 == 0,
            created_at: Utc::now(),
        })
        .collect()
}

/// Creation payload used across tests
pub fn create_new_task() -> NewTask {
    NewTask::new("Buy milk", None)
}

/// Creation payload carrying every optional field
pub fn create_full_new_task() -> NewTask {
    NewTask::new("Write report", Some("Quarterly numbers".to_string())).with_done(true)
}

/// Update payload that only toggles completion
pub fn create_done_update() -> UpdateTask {
    UpdateTask {
        done: Some(true),
        ..Default::default()
    }
}
