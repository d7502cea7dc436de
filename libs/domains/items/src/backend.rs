//! Startup wiring: construct the configured repository adapter
//!
//! Calling code selects an engine once, through configuration, and only
//! ever sees the [`ItemRepository`] trait afterwards.

use std::sync::Arc;

use core_config::database::DatabaseConfig;
use core_config::store::StoreBackend;
use database::DatabaseConnection;
use tracing::info;

use crate::error::ItemResult;
use crate::orm::SeaOrmItemRepository;
use crate::repository::{InMemoryItemRepository, ItemRepository};
use crate::sqlx::SqlxItemRepository;

/// Connect the selected backend and return it behind the repository trait
///
/// The SQL-backed variants share the connector and migration path; the only
/// difference is the adapter constructed on top of the pool.
pub async fn connect(
    backend: StoreBackend,
    config: &DatabaseConfig,
) -> ItemResult<Arc<dyn ItemRepository>> {
    info!(backend = %backend, "Selecting item store backend");

    match backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryItemRepository::new())),
        StoreBackend::Sql => {
            let db = connect_database(config).await?;
            let pool = db.get_sqlite_connection_pool().clone();
            Ok(Arc::new(SqlxItemRepository::new(pool)))
        }
        StoreBackend::Orm => {
            let db = connect_database(config).await?;
            Ok(Arc::new(SeaOrmItemRepository::new(db)))
        }
    }
}

async fn connect_database(config: &DatabaseConfig) -> ItemResult<DatabaseConnection> {
    let db = database::sqlite::connect(&config.url).await?;
    database::sqlite::run_migrations::<migration::Migrator>(&db).await?;
    Ok(db)
}
