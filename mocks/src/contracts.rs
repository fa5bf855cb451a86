//! Contract test helpers for validating trait implementations
//!
//! Provides standardized tests that any TaskRepository implementation
//! should pass. Each helper expects an empty repository.

use crate::{create_new_task, NewTaskBuilder, UpdateTaskBuilder};
use task_core::{TaskError, TaskRepository};

/// Test any TaskRepository implementation with comprehensive contract tests
///
/// The individual helpers leave data behind, so they run against the same
/// repository in a fixed order.
pub async fn test_repository_contract<R: TaskRepository>(repo: &R) {
    test_health_check_contract(repo).await;
    test_create_contract(repo).await;
    test_get_contract(repo).await;
    test_update_contract(repo).await;
    test_delete_contract(repo).await;
    test_list_contract(repo).await;
}

/// Test health check contract
pub async fn test_health_check_contract<R: TaskRepository>(repo: &R) {
    assert!(
        repo.health_check().await.is_ok(),
        "Health check should pass for healthy repository"
    );
}

/// Test task creation contract
pub async fn test_create_contract<R: TaskRepository>(repo: &R) {
    let new_task = create_new_task();
    let task = repo
        .create(new_task.clone())
        .await
        .expect("Create should succeed");

    assert!(task.id > 0, "Created task should have positive ID");
    assert_eq!(task.title, new_task.title, "Created task should preserve title");
    assert_eq!(task.description, None, "Description should default to None");
    assert!(!task.done, "New task should default to not done");

    let again = repo
        .create(new_task)
        .await
        .expect("Duplicate titles are allowed");
    assert_ne!(again.id, task.id, "Every creation must get a fresh ID");

    let full = repo
        .create(
            NewTaskBuilder::new()
                .with_title("Complete")
                .with_description("every field")
                .done()
                .build(),
        )
        .await
        .expect("Create with all fields should succeed");
    assert_eq!(full.description.as_deref(), Some("every field"));
    assert!(full.done, "Explicit done flag should be stored");

    let blank = repo
        .create(NewTaskBuilder::new().with_title("   ").build())
        .await;
    assert!(
        matches!(blank, Err(TaskError::Validation(_))),
        "Blank title should be rejected, got {blank:?}"
    );
}

/// Test retrieval contract
pub async fn test_get_contract<R: TaskRepository>(repo: &R) {
    let created = repo
        .create(NewTaskBuilder::new().with_title("Fetch me").build())
        .await
        .expect("Create should succeed");

    let retrieved = repo.get_by_id(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, Some(created), "Get should return the stored task");

    let missing = repo.get_by_id(i64::MAX).await.expect("Get should succeed");
    assert!(missing.is_none(), "Missing ID should return None, not an error");
}

/// Test partial update contract
pub async fn test_update_contract<R: TaskRepository>(repo: &R) {
    let created = repo
        .create(
            NewTaskBuilder::new()
                .with_title("Patch target")
                .with_description("untouched")
                .build(),
        )
        .await
        .expect("Create should succeed");

    let toggled = repo
        .update(created.id, UpdateTaskBuilder::new().with_done(true).build())
        .await
        .expect("Update should succeed");
    assert!(toggled.done);
    assert_eq!(toggled.title, created.title, "Omitted title must be preserved");
    assert_eq!(
        toggled.description, created.description,
        "Omitted description must be preserved"
    );
    assert_eq!(toggled.created_at, created.created_at, "created_at is immutable");

    let reverted = repo
        .update(created.id, UpdateTaskBuilder::new().with_done(false).build())
        .await
        .expect("done may be toggled back");
    assert!(!reverted.done);

    let described = repo
        .update(created.id, UpdateTaskBuilder::new().with_description("revised").build())
        .await
        .expect("Replacing description should succeed");
    assert_eq!(described.description.as_deref(), Some("revised"));
    assert!(!described.done, "Omitted done must be preserved");

    let blank = repo
        .update(created.id, UpdateTaskBuilder::new().with_title(" ").build())
        .await;
    assert!(matches!(blank, Err(TaskError::Validation(_))));

    let missing = repo
        .update(i64::MAX, UpdateTaskBuilder::new().with_done(true).build())
        .await;
    assert!(
        matches!(missing, Err(TaskError::NotFound(_))),
        "Updating a missing task should be NotFound, got {missing:?}"
    );
}

/// Test delete contract
pub async fn test_delete_contract<R: TaskRepository>(repo: &R) {
    let created = repo
        .create(NewTaskBuilder::new().with_title("Delete me").build())
        .await
        .expect("Create should succeed");

    repo.delete(created.id).await.expect("Delete should succeed");
    assert!(
        repo.get_by_id(created.id).await.expect("Get should succeed").is_none(),
        "Deleted task should be gone"
    );

    let again = repo.delete(created.id).await;
    assert!(
        matches!(again, Err(TaskError::NotFound(_))),
        "Deleting twice should be NotFound, got {again:?}"
    );

    let recreated = repo
        .create(NewTaskBuilder::new().with_title("Delete me").build())
        .await
        .expect("Create should succeed");
    assert!(recreated.id > created.id, "Deleted IDs must not be reused");
}

/// Test listing contract
pub async fn test_list_contract<R: TaskRepository>(repo: &R) {
    let before = repo.list().await.expect("List should succeed");

    let mut created = Vec::new();
    for i in 0..3 {
        created.push(
            repo.create(NewTaskBuilder::new().with_title(format!("Listed {i}")).build())
                .await
                .expect("Create should succeed"),
        );
    }

    let after = repo.list().await.expect("List should succeed");
    assert_eq!(after.len(), before.len() + 3);
    assert_eq!(&after[before.len()..], created.as_slice());

    let ids: Vec<i64> = after.iter().map(|t| t.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "List should be in insertion (ID) order");
}
