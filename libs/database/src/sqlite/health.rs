use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::time::Instant;

use crate::common::error::{DatabaseError, DatabaseResult};

/// Health check result
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub latency_ms: u64,
}

/// Check that the database answers a trivial query
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<HealthStatus> {
    let start = Instant::now();

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "select 1".to_string(),
    ))
    .await
    .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    Ok(HealthStatus {
        healthy: true,
        latency_ms: start.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::connect;

    #[tokio::test]
    async fn test_check_health() {
        let db = connect("sqlite::memory:").await.unwrap();
        let status = check_health(&db).await.unwrap();
        assert!(status.healthy);
    }
}
