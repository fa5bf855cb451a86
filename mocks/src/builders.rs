//! Builder pattern implementations for easy test data construction
//!
//! Provides fluent builders for:
//! - Task construction with sensible defaults
//! - NewTask and UpdateTask variants

use task_core::{NewTask, Task, UpdateTask};
use chrono::{DateTime, Utc};

/// Builder for constructing Task instances in tests
pub struct TaskBuilder {
    task: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        Self {
            task: Task {
                id: 1,
                title: "Test Task".to_string(),
                description: None,
                done: false,
                created_at: Utc::now(),
            },
        }
    }

    /// Set task ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.task.id = id;
        self
    }

    /// Set task title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    /// Set task description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = Some(description.into());
        self
    }

    /// Mark the task as completed
    pub fn done(mut self) -> Self {
        self.task.done = true;
        self
    }

    /// Set insertion timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.task.created_at = created_at;
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for NewTask payloads
pub struct NewTaskBuilder {
    task: NewTask,
}

impl Default for NewTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTaskBuilder {
    pub fn new() -> Self {
        Self {
            task: NewTask::new("New Task", None),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.task.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.task.description = Some(description.into());
        self
    }

    pub fn done(mut self) -> Self {
        self.task.done = true;
        self
    }

    pub fn build(self) -> NewTask {
        self.task
    }
}

/// Builder for UpdateTask payloads
#[derive(Default)]
pub struct UpdateTaskBuilder {
    updates: UpdateTask,
}

impl UpdateTaskBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.updates.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.updates.description = Some(description.into());
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.updates.done = Some(done);
        self
    }

    pub fn build(self) -> UpdateTask {
        self.updates
    }
}
