use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with id {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },
}

impl TaskError {
    pub fn database(operation: &'static str, source: DbErr) -> Self {
        Self::Database { operation, source }
    }
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => AppError::NotFound(format!("Task with id {} not found", id)),
            TaskError::Validation(msg) => AppError::Validation(msg),
            TaskError::Database { operation, source } => {
                tracing::error!(operation, error = %source, "Task storage operation failed");
                AppError::Database(source)
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
