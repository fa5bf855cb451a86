use crate::common::{row_to_task, sqlx_error_to_task_error, CREATE_TASKS_TABLE, TASK_COLUMNS};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};
use std::{str::FromStr, time::Duration};
use task_core::{
    error::{Result, TaskError},
    models::{NewTask, Task, UpdateTask},
    repository::TaskRepository,
    validation::TaskValidator,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite implementation of the TaskRepository trait
///
/// Every trait method borrows one pooled connection for the duration of a
/// single autocommitted statement; the connection returns to the pool when
/// the future completes or is dropped.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (`sqlite://path`, a bare path, or `:memory:`)
    ///
    /// # Returns
    /// * `Ok(SqliteTaskRepository)` - Successfully connected repository
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTaskRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTaskRepository::new(":memory:").await?;
    ///
    /// // File-based database
    /// let repo = SqliteTaskRepository::new("sqlite://tasks.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_pool_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT)
            .await
    }

    /// Create a repository with explicit pool sizing
    pub async fn with_pool_options(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        if max_connections == 0 {
            return Err(TaskError::Configuration(
                "max_connections must be greater than 0".to_string(),
            ));
        }

        let pool = if Self::is_in_memory(database_url) {
            // Every connection to :memory: is a separate database, so keep
            // exactly one alive for the life of the pool
            let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(sqlx_error_to_task_error)?
                .journal_mode(SqliteJournalMode::Memory)
                .busy_timeout(BUSY_TIMEOUT);

            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
                .map_err(sqlx_error_to_task_error)?
        } else {
            let connect_options = Self::file_connect_options(database_url)?;

            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
                .map_err(sqlx_error_to_task_error)?
        };

        tracing::debug!(database_url = %database_url, max_connections, "SQLite pool connected");
        Ok(Self { pool })
    }

    /// Create the tasks table if it does not exist yet
    ///
    /// Safe to call on every startup: existing tables and rows are left
    /// untouched.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TASKS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| TaskError::Database(format!("Schema creation failed: {e}")))?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones to return
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn is_in_memory(database_url: &str) -> bool {
        database_url.contains(":memory:") || database_url.contains("mode=memory")
    }

    /// Parse a file URL, keeping its query parameters out of the file name
    fn file_connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| TaskError::Configuration(format!("Invalid database URL: {e}")))?;

        Ok(options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT))
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let task = task.normalized();
        TaskValidator::validate_new_task(&task)?;

        let sql = format!(
            "INSERT INTO tasks (title, description, done, created_at) VALUES (?, ?, ?, ?) RETURNING {TASK_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.done)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        let created = row_to_task(&row)?;
        tracing::debug!(task_id = created.id, "Task created");
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?");
        let result = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id ASC");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        rows.iter().map(row_to_task).collect()
    }

    async fn update(&self, id: i64, updates: UpdateTask) -> Result<Task> {
        let updates = updates.normalized();
        TaskValidator::validate_update_task(&updates)?;

        // Check if task exists first
        let existing = match self.get_by_id(id).await? {
            Some(task) => task,
            None => return Err(TaskError::not_found_id(id)),
        };

        if updates.is_empty() {
            return Ok(existing);
        }

        let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
            sqlx::QueryBuilder::new("UPDATE tasks SET ");

        let mut has_updates = false;

        if let Some(title) = &updates.title {
            query_builder.push("title = ");
            query_builder.push_bind(title);
            has_updates = true;
        }

        if let Some(description) = &updates.description {
            if has_updates {
                query_builder.push(", ");
            }
            query_builder.push("description = ");
            query_builder.push_bind(description);
            has_updates = true;
        }

        if let Some(done) = updates.done {
            if has_updates {
                query_builder.push(", ");
            }
            query_builder.push("done = ");
            query_builder.push_bind(done);
        }

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(" RETURNING ");
        query_builder.push(TASK_COLUMNS);

        // The row may have been deleted between the lookup and the write
        let row = query_builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?
            .ok_or_else(|| TaskError::not_found_id(id))?;

        let updated = row_to_task(&row)?;
        tracing::debug!(task_id = id, "Task updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.get_by_id(id).await?.is_none() {
            return Err(TaskError::not_found_id(id));
        }

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        if result.rows_affected() == 0 {
            return Err(TaskError::not_found_id(id));
        }

        tracing::debug!(task_id = id, "Task deleted");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_test_repository() -> SqliteTaskRepository {
        let repo = SqliteTaskRepository::new(":memory:").await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_repository_creation() {
        let repo = create_test_repository().await;
        let result = repo.health_check().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let repo = create_test_repository().await;
        let task = repo.create(NewTask::new("Survives", None)).await.unwrap();

        repo.ensure_schema().await.unwrap();

        let retrieved = repo.get_by_id(task.id).await.unwrap();
        assert_eq!(retrieved, Some(task));
    }

    #[tokio::test]
    async fn test_create_task() {
        let repo = create_test_repository().await;

        let created = repo
            .create(NewTask::new("Buy milk", None))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description, None);
        assert!(!created.done);
        assert!(created.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_create_trims_and_rejects_blank_title() {
        let repo = create_test_repository().await;

        let created = repo
            .create(NewTask::new("  padded  ", Some(" text ".to_string())))
            .await
            .unwrap();
        assert_eq!(created.title, "padded");
        assert_eq!(created.description.as_deref(), Some("text"));

        let error = repo.create(NewTask::new("   ", None)).await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = create_test_repository().await;
        let created = repo
            .create(NewTask::new("Lookup", Some("by id".to_string())).with_done(true))
            .await
            .unwrap();

        let found = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repo.get_by_id(999).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_partial_fields() {
        let repo = create_test_repository().await;
        let created = repo
            .create(NewTask::new("Original", Some("keep me".to_string())))
            .await
            .unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateTask {
                    done: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.done);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description.as_deref(), Some("keep me"));
        assert_eq!(updated.created_at, created.created_at);

        let renamed = repo
            .update(
                created.id,
                UpdateTask {
                    title: Some("Renamed".to_string()),
                    description: Some("replaced".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.title, "Renamed");
        assert_eq!(renamed.description.as_deref(), Some("replaced"));
        assert!(renamed.done);
    }

    #[tokio::test]
    async fn test_update_missing_and_empty() {
        let repo = create_test_repository().await;

        let error = repo.update(42, UpdateTask::new()).await.unwrap_err();
        assert_eq!(error, TaskError::not_found_id(42));

        let created = repo.create(NewTask::new("Unchanged", None)).await.unwrap();
        let same = repo.update(created.id, UpdateTask::new()).await.unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let repo = create_test_repository().await;
        let created = repo.create(NewTask::new("Short lived", None)).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        let error = repo.delete(created.id).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = create_test_repository().await;
        let first = repo.create(NewTask::new("First", None)).await.unwrap();
        let second = repo.create(NewTask::new("Second", None)).await.unwrap();

        repo.delete(second.id).await.unwrap();
        let third = repo.create(NewTask::new("Third", None)).await.unwrap();

        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = create_test_repository().await;
        assert!(repo.list().await.unwrap().is_empty());

        for i in 0..3 {
            repo.create(NewTask::new(format!("Task {i}"), None))
                .await
                .unwrap();
        }

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Task 0", "Task 1", "Task 2"]);
    }

    #[tokio::test]
    async fn test_zero_connections_rejected() {
        let error = SqliteTaskRepository::with_pool_options(":memory:", 0, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(error, TaskError::Configuration(_)));
    }

    #[test]
    fn test_url_parsing() {
        assert!(SqliteTaskRepository::is_in_memory(":memory:"));
        assert!(SqliteTaskRepository::is_in_memory("sqlite::memory:"));
        assert!(!SqliteTaskRepository::is_in_memory("sqlite://tasks.db"));

        for (url, expected) in [
            ("sqlite://tasks.db", "tasks.db"),
            ("sqlite:///tmp/t.db", "/tmp/t.db"),
            ("sqlite:data.db", "data.db"),
            ("plain.db", "plain.db"),
            ("sqlite://tasks.db?mode=rwc", "tasks.db"),
        ] {
            let options = SqliteTaskRepository::file_connect_options(url).unwrap();
            assert_eq!(options.get_filename(), std::path::Path::new(expected), "{url}");
        }

        let error = SqliteTaskRepository::file_connect_options("sqlite://tasks.db?bogus=1")
            .unwrap_err();
        assert!(matches!(error, TaskError::Configuration(_)));
    }
}
