use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::config::SqliteConfig;
use crate::common::error::{DatabaseError, DatabaseResult};
use crate::common::retry::{RetryConfig, retry_with_backoff};

/// Connect to SQLite with default pool settings
pub async fn connect(url: &str) -> DatabaseResult<DatabaseConnection> {
    connect_from_config(&SqliteConfig::new(url)).await
}

/// Connect to SQLite using a [`SqliteConfig`]
pub async fn connect_from_config(config: &SqliteConfig) -> DatabaseResult<DatabaseConnection> {
    connect_with_options(config.clone().into_connect_options()).await
}

/// Connect to SQLite with fully custom SeaORM options
pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    let url = options.get_url().to_string();
    let db = Database::connect(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(format!("{}: {}", url, e)))?;

    info!(url = %url, "Connected to SQLite");
    Ok(db)
}

/// Connect with retry and exponential backoff
///
/// Useful when the database file lives on storage that may not be ready yet.
pub async fn connect_with_retry(
    config: &SqliteConfig,
    retry: RetryConfig,
) -> DatabaseResult<DatabaseConnection> {
    retry_with_backoff(|| connect_from_config(config), retry).await
}

/// Run pending migrations with the given migrator
pub async fn run_migrations<M: MigratorTrait>(db: &DatabaseConnection) -> DatabaseResult<()> {
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    info!("Migrations applied");
    Ok(())
}
