use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Check PostgreSQL database health
///
/// Pings the pool; used by the `/ready` probe.
///
/// # Example
/// ```ignore
/// use database::postgres::check_health;
///
/// if let Err(e) = check_health(&db).await {
///     tracing::warn!("database unavailable: {}", e);
/// }
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    db.ping().await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
