//! Items Domain
//!
//! Persistence of Item records behind a single four-operation contract
//! (insert, update, find-by-id, filtered find-all), with interchangeable
//! storage adapters selected at startup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← input validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← the contract (trait)
//! └──────┬──────┘
//!        │
//!   ┌────┴──────────┬───────────────┐
//!   ▼               ▼               ▼
//! in-memory map   raw SQL (sqlx)  SeaORM entities
//! ```
//!
//! All adapters share one rule for the dynamic search filter: each optional
//! criterion contributes a conjunctive clause only when present; absent
//! criteria are elided, never defaulted.
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::{FromEnv, database::DatabaseConfig, store::StoreBackend};
//! use domain_items::{CreateItem, ItemFilter, backend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = backend::connect(StoreBackend::from_env()?, &DatabaseConfig::from_env()?).await?;
//!
//! let item = repo
//!     .insert(CreateItem {
//!         name: "itemA-1".to_string(),
//!         price: 10_000,
//!         quantity: 10,
//!     })
//!     .await?;
//!
//! let cheap = repo
//!     .find_all(ItemFilter {
//!         max_price: Some(20_000),
//!         ..Default::default()
//!     })
//!     .await?;
//! # let _ = (item, cheap);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod entity;
pub mod error;
pub mod models;
pub mod orm;
pub mod repository;
pub mod service;
pub mod sqlx;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use models::{CreateItem, Item, ItemFilter, ItemPredicate, UpdateItem};
pub use orm::SeaOrmItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use self::sqlx::SqlxItemRepository;
pub use service::ItemService;
