use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task stored by the service.
///
/// Tasks carry a storage-assigned numeric ID, a title, an optional free-form
/// description and a `done` flag that clients may toggle in either direction.
///
/// # Examples
///
/// ```rust
/// use task_core::models::{Task, UpdateTask};
/// use chrono::Utc;
///
/// let mut task = Task {
///     id: 1,
///     title: "Buy milk".to_string(),
///     description: None,
///     done: false,
///     created_at: Utc::now(),
/// };
///
/// let updates = UpdateTask {
///     done: Some(true),
///     ..Default::default()
/// };
/// task.apply(&updates);
///
/// assert!(task.done);
/// assert_eq!(task.title, "Buy milk");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Auto-increment primary key
    pub id: i64,
    /// Short task title, never empty
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Completion flag
    pub done: bool,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Overwrite the fields present in `updates`, leaving the rest untouched.
    ///
    /// `id` and `created_at` are never modified.
    pub fn apply(&mut self, updates: &UpdateTask) {
        if let Some(title) = &updates.title {
            self.title = title.clone();
        }
        if let Some(description) = &updates.description {
            self.description = Some(description.clone());
        }
        if let Some(done) = updates.done {
            self.done = done;
        }
    }
}

/// Data transfer object for creating new tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Task title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Initial completion flag
    #[serde(default)]
    pub done: bool,
}

impl NewTask {
    /// Create a new, not yet completed task
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
            done: false,
        }
    }

    /// Set the initial completion flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Strip surrounding whitespace from the text fields
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.map(|d| d.trim().to_string()),
            done: self.done,
        }
    }
}

/// Data transfer object for partially updating existing tasks.
///
/// A field that is absent or `null` is not touched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateTask {
    /// Optional new title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional new description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional new completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl UpdateTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the payload carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }

    /// Strip surrounding whitespace from the text fields that are present
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description.map(|d| d.trim().to_string()),
            done: self.done,
        }
    }
}
