//! SQLite database connector and utilities
//!
//! Provides connection management, migration running, and SQLite-specific
//! helpers for the embedded engine.

mod config;
mod connector;
mod health;

pub use config::SqliteConfig;
pub use connector::{
    connect, connect_from_config, connect_with_options, connect_with_retry, run_migrations,
};
pub use health::{HealthStatus, check_health};
