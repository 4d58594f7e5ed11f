pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error response uses this envelope:
/// - `message`: human-readable error message
/// - `status_code`: HTTP status code, repeated in the body
/// - `details`: structured error details; an empty object when there is
///   nothing structured to report, a field-level map for validation errors
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Category with id '42' not found",
///   "status_code": 404,
///   "details": {}
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
    /// Structured error details (e.g., validation field errors)
    pub details: serde_json::Value,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: status.as_u16(),
            details: serde_json::json!({}),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates define their own error enums and convert them into this
/// type at the boundary; this is where the wire envelope and status codes
/// are decided.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Flatten `validator` errors into a `{field: [{code, message, params}]}` map.
pub fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction error: {:?}", e);
                // Malformed bodies are a validation failure on this API,
                // regardless of what axum's rejection suggests.
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (status, ErrorResponse::new(status, e.body_text()))
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (
                    status,
                    ErrorResponse::new(status, "Request validation failed")
                        .with_details(validation_details(&e)),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, ErrorResponse::new(status, "Internal server error"))
            }
            AppError::BadRequest(message) => {
                let status = StatusCode::BAD_REQUEST;
                (status, ErrorResponse::new(status, message))
            }
            AppError::NotFound(message) => {
                let status = StatusCode::NOT_FOUND;
                (status, ErrorResponse::new(status, message))
            }
            AppError::Conflict(message) => {
                let status = StatusCode::CONFLICT;
                (status, ErrorResponse::new(status, message))
            }
            AppError::UnprocessableEntity(message) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                (status, ErrorResponse::new(status, message))
            }
            AppError::InternalServerError(message) => {
                tracing::error!("Internal server error: {}", message);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, ErrorResponse::new(status, "Internal server error"))
            }
            AppError::ServiceUnavailable(message) => {
                tracing::error!("Service unavailable: {}", message);
                let status = StatusCode::SERVICE_UNAVAILABLE;
                (status, ErrorResponse::new(status, message))
            }
        };

        (status, Json(body)).into_response()
    }
}
