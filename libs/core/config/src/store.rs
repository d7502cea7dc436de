use std::str::FromStr;

use strum::{Display, EnumString};

use crate::{ConfigError, FromEnv, env_or_default};

/// Which item store adapter to construct at startup.
///
/// The adapter is chosen once when the application wires itself together;
/// calling code only ever sees the repository trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum StoreBackend {
    /// Owned in-memory map, no durability
    #[default]
    Memory,
    /// Hand-written SQL over a connection pool
    Sql,
    /// SeaORM entities
    Orm,
}

impl FromEnv for StoreBackend {
    /// Reads ITEM_STORE_BACKEND ("memory" | "sql" | "orm"), defaulting to "memory"
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("ITEM_STORE_BACKEND", "memory");
        StoreBackend::from_str(&raw).map_err(|e| ConfigError::ParseError {
            key: "ITEM_STORE_BACKEND".to_string(),
            details: format!("unknown backend '{}': {}", raw, e),
        })
    }
}
