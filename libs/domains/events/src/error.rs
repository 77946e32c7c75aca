//! Event domain error types

use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// Event domain errors
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event with id {0} not found")]
    NotFound(i64),

    /// Field or schedule rule violated
    #[error("{0}")]
    Validation(String),

    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl EventError {
    pub fn database(operation: &'static str, source: DbErr) -> Self {
        Self::Database { operation, source }
    }
}

/// Result type for event operations
pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event with id {id} not found")),
            EventError::Validation(msg) => AppError::Validation(msg),
            EventError::Database { operation, source } => {
                tracing::error!(operation, error = %source, "Event storage operation failed");
                AppError::Database(source)
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
