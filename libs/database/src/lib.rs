//! Database library providing the SQLite connector and shared utilities
//!
//! This library owns connection management for the embedded SQLite engine
//! used by the SQL-backed item store adapters, plus the cross-cutting
//! pieces: a unified error type, retry-with-backoff for connection
//! establishment, and a health check.
//!
//! # Examples
//!
//! ```ignore
//! use database::sqlite;
//! use migration::Migrator;
//!
//! let db = sqlite::connect("sqlite://items.db?mode=rwc").await?;
//! sqlite::run_migrations::<Migrator>(&db).await?;
//! ```

pub mod common;
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
