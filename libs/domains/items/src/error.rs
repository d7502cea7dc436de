use sea_orm::{DbErr, SqlErr};
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Constraint violations are malformed input from the store's point of view;
/// everything else the engine reports is an infrastructure failure.
impl From<sqlx::Error> for ItemError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return ItemError::Validation(db.message().to_string());
                }
                _ => {}
            }
        }
        ItemError::StorageUnavailable(err.to_string())
    }
}

impl From<DbErr> for ItemError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
            ) => ItemError::Validation(msg),
            // SQLite reports NOT NULL / CHECK failures outside SqlErr
            _ if err.to_string().to_lowercase().contains("constraint") => {
                ItemError::Validation(err.to_string())
            }
            _ => ItemError::StorageUnavailable(err.to_string()),
        }
    }
}

impl From<database::DatabaseError> for ItemError {
    fn from(err: database::DatabaseError) -> Self {
        ItemError::StorageUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_maps_to_storage_unavailable() {
        let err: ItemError = DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection refused".to_string(),
        ))
        .into();
        assert!(matches!(err, ItemError::StorageUnavailable(_)));
    }

    #[test]
    fn test_constraint_message_maps_to_validation() {
        let err: ItemError = DbErr::Custom(
            "NOT NULL constraint failed: item.item_name".to_string(),
        )
        .into();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[test]
    fn test_database_error_maps_to_storage_unavailable() {
        let err: ItemError =
            database::DatabaseError::ConnectionFailed("no such file".to_string()).into();
        assert!(matches!(err, ItemError::StorageUnavailable(_)));
    }
}
