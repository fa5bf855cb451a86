use database::SqliteTaskRepository;
use mocks::{test_repository_contract, MockTaskRepository};

// Both repository implementations must satisfy the same contract, so the
// mock used by the HTTP tests behaves like the real store.

#[tokio::test]
async fn test_sqlite_repository_contract() {
    let repo = SqliteTaskRepository::new(":memory:").await.unwrap();
    repo.ensure_schema().await.unwrap();

    test_repository_contract(&repo).await;
}

#[tokio::test]
async fn test_sqlite_file_repository_contract() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("contract.db").display());
    let repo = SqliteTaskRepository::new(&url).await.unwrap();
    repo.ensure_schema().await.unwrap();

    test_repository_contract(&repo).await;
}

#[tokio::test]
async fn test_mock_repository_contract() {
    let repo = MockTaskRepository::new();
    test_repository_contract(&repo).await;
}
