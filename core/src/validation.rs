use crate::{
    error::{Result, TaskError},
    models::{NewTask, UpdateTask},
};

/// Validation utilities for task payloads
///
/// Only non-emptiness of the title is enforced. There is no length limit,
/// no uniqueness check, and `done` may be toggled freely.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate a task title
    ///
    /// # Returns
    /// * `Ok(())` - If the title contains at least one non-whitespace character
    /// * `Err(TaskError::Validation)` - If the title is empty or only whitespace
    pub fn validate_title(title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(TaskError::empty_field("title"));
        }
        Ok(())
    }

    /// Validate a complete creation payload
    pub fn validate_new_task(task: &NewTask) -> Result<()> {
        Self::validate_title(&task.title)
    }

    /// Validate the fields present in an update payload
    pub fn validate_update_task(updates: &UpdateTask) -> Result<()> {
        if let Some(title) = &updates.title {
            Self::validate_title(title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(TaskValidator::validate_title("Buy milk").is_ok());
        assert!(TaskValidator::validate_title("x").is_ok());
        assert!(TaskValidator::validate_title(&"a".repeat(10_000)).is_ok());

        let error = TaskValidator::validate_title("").unwrap_err();
        assert_eq!(error, TaskError::empty_field("title"));
        assert!(TaskValidator::validate_title("   \t\n").is_err());
    }

    #[test]
    fn test_validate_new_task() {
        assert!(TaskValidator::validate_new_task(&NewTask::new("Valid", None)).is_ok());
        assert!(TaskValidator::validate_new_task(&NewTask::new("  ", Some("d".into()))).is_err());
    }

    #[test]
    fn test_validate_update_task() {
        assert!(TaskValidator::validate_update_task(&UpdateTask::new()).is_ok());

        let done_only = UpdateTask {
            done: Some(true),
            ..Default::default()
        };
        assert!(TaskValidator::validate_update_task(&done_only).is_ok());

        let blank_title = UpdateTask {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(TaskValidator::validate_update_task(&blank_title)
            .unwrap_err()
            .is_validation());

        // Descriptions are free-form, even empty
        let empty_description = UpdateTask {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(TaskValidator::validate_update_task(&empty_description).is_ok());
    }
}
