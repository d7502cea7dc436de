/// Unified database error type
///
/// This provides a consistent error interface for connection handling,
/// migrations, and health checks.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Engine-level errors (SeaORM)
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
