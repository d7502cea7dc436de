use sea_orm::ConnectOptions;
use std::time::Duration;

/// SQLite connection configuration
///
/// Holds pool settings for the embedded engine. Construct manually or via
/// [`SqliteConfig::new`] for defaults.
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL, e.g. `sqlite://items.db?mode=rwc` or
    /// `sqlite::memory:`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    /// Create a new SqliteConfig with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 16,
            min_connections: 1,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 8,
            sqlx_logging: true,
        }
    }

    /// Whether the URL points at a transient in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Convert this config into SeaORM ConnectOptions
    ///
    /// An in-memory database only exists on the connection that opened it, so
    /// the pool is pinned to a single connection in that case.
    pub fn into_connect_options(self) -> ConnectOptions {
        let single = self.is_in_memory();
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(if single { 1 } else { self.max_connections })
            .min_connections(if single { 1 } else { self.min_connections })
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
