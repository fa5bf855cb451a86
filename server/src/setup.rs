use anyhow::{Context, Result};
use database::SqliteTaskRepository;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use task_api::TaskApiServer;
use tracing::info;

use crate::config::Config;

/// Fully wired application: the HTTP server and the repository it owns
pub struct App {
    pub server: TaskApiServer<SqliteTaskRepository>,
    pub repository: Arc<SqliteTaskRepository>,
}

/// Create the SQLite repository and make sure the tasks table exists
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTaskRepository>> {
    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteTaskRepository::with_pool_options(
        &database_url,
        config.database.max_connections,
        Duration::from_secs(config.database.connection_timeout),
    )
    .await
    .with_context(|| format!("Failed to open database at {database_url}"))?;

    repo.ensure_schema()
        .await
        .context("Failed to create database schema")?;

    info!("Task repository created successfully");
    Ok(Arc::new(repo))
}

/// Create the HTTP server over the given repository
pub fn create_server(repository: Arc<SqliteTaskRepository>) -> TaskApiServer<SqliteTaskRepository> {
    TaskApiServer::new(repository)
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config) -> Result<App> {
    ensure_database_directory(&config.database_url())
        .context("Failed to create database directory")?;

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;
    let server = create_server(repository.clone());

    info!("Application initialized successfully");
    Ok(App { server, repository })
}

/// Ensure the parent directory of a file database exists
///
/// In-memory URLs are left alone.
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if database_url.contains(":memory:") || database_url.contains("mode=memory") {
        return Ok(());
    }

    let db_path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let db_path = db_path.split_once('?').map_or(db_path, |(path, _)| path);

    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory: {}", parent.display());
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }
    Ok(())
}
