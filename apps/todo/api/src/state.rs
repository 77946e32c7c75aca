//! Shared application state passed to routers and the readiness probe.

/// Cloned per handler; the connection is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
