//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: fresh in-memory SQLite database with migrations applied
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let connection = db.connection();
//! # let _ = connection;
//! # }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some and unwrap it
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
