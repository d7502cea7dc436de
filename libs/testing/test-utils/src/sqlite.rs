//! SQLite test infrastructure
//!
//! Every `TestDatabase` is its own private in-memory database with the item
//! schema applied; dropping it drops the storage with it, so tests never
//! share state.

use database::sqlite;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sqlx::SqlitePool;

/// Fresh, migrated in-memory database for one test
pub struct TestDatabase {
    connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new in-memory database with migrations applied
    ///
    /// # Panics
    ///
    /// Panics on connection or migration failure; a test has no useful way
    /// to continue without storage.
    pub async fn new() -> Self {
        let connection = sqlite::connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory sqlite");

        sqlite::run_migrations::<Migrator>(&connection)
            .await
            .expect("failed to apply migrations");

        Self { connection }
    }

    /// SeaORM connection handle
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Raw sqlx pool over the same database
    pub fn sqlite_pool(&self) -> SqlitePool {
        self.connection.get_sqlite_connection_pool().clone()
    }
}
