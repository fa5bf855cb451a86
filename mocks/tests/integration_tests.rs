//! Integration tests for the mocks crate
//!
//! Tests the mock implementations and utilities to ensure they work correctly
//! and provide the expected testing capabilities.

use mocks::*;
use std::collections::HashSet;
use std::sync::Arc;
use task_core::{TaskError, TaskRepository};

#[tokio::test]
async fn test_mock_repository_basic_operations() {
    let repo = MockTaskRepository::new();

    // Test creation
    let task = repo.create(create_new_task()).await.unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.title, "Buy milk");
    assert!(!task.done);

    // Verify call tracking
    repo.assert_called("create");

    // Test retrieval
    let retrieved = repo.get_by_id(task.id).await.unwrap().unwrap();
    assert_eq!(retrieved, task);

    repo.assert_called("get_by_id");
}

#[tokio::test]
async fn test_mock_repository_error_injection() {
    let repo = MockTaskRepository::new();

    // Inject error
    repo.inject_error(TaskError::Database("disk full".to_string()));

    // Next operation should fail
    let result = repo.create(create_new_task()).await;
    assert!(matches!(result.unwrap_err(), TaskError::Database(_)));
    assert_eq!(repo.task_count(), 0);

    // Clear error and try again
    repo.inject_error(TaskError::Internal("unused".to_string()));
    repo.clear_error();
    assert!(repo.create(create_new_task()).await.is_ok());
}

#[tokio::test]
async fn test_mock_repository_contract() {
    let repo = MockTaskRepository::new();
    test_repository_contract(&repo).await;
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let repo = Arc::new(MockTaskRepository::new());

    let handles: Vec<_> = generate_new_tasks(25)
        .into_iter()
        .map(|task| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(task).await.unwrap().id })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()), "duplicate id returned");
    }

    assert_eq!(ids.len(), 25);
    assert_eq!(repo.list().await.unwrap().len(), 25);
}

#[tokio::test]
async fn test_prepopulated_fixtures() {
    let repo = MockTaskRepository::with_tasks(create_test_tasks(6));

    let tasks = repo.list().await.unwrap();
    assert_eq!(tasks.len(), 6);
    assert_eq!(tasks.iter().filter(|t| t.done).count(), 2);

    let updated = repo.update(2, create_done_update()).await.unwrap();
    assert!(updated.done);
    assert_eq!(updated.title, "Test Task 2");
}

#[test]
fn test_blocking_use_outside_runtime() {
    let repo = MockTaskRepository::with_tasks(create_test_tasks(3));

    let tasks = tokio_test::assert_ok!(tokio_test::block_on(repo.list()));
    assert_eq!(tasks.len(), 3);

    tokio_test::assert_err!(tokio_test::block_on(repo.delete(42)));
    assert_eq!(repo.task_count(), 3);
}

#[tokio::test]
async fn test_seeded_task_and_full_payload() {
    let seeded = create_test_task();
    let repo = MockTaskRepository::with_tasks(vec![seeded.clone()]);

    assert_eq!(repo.get_by_id(seeded.id).await.unwrap(), Some(seeded.clone()));

    let created = repo.create(create_full_new_task()).await.unwrap();
    assert_eq!(created.id, seeded.id + 1);
    assert_eq!(created.title, "Write report");
    assert_eq!(created.description.as_deref(), Some("Quarterly numbers"));
    assert!(created.done);
}
