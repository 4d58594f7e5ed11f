use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task with id '{0}' not found")]
    NotFound(i32),

    #[error("Category with id '{0}' not found")]
    CategoryNotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => {
                AppError::NotFound(format!("Task with id '{}' not found", id))
            }
            TaskError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category with id '{}' not found", id))
            }
            TaskError::Validation(msg) => AppError::UnprocessableEntity(msg),
            TaskError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
