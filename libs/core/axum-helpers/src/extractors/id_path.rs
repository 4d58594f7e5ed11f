//! Integer path parameter extractor with automatic validation.

use crate::errors::ErrorResponse;
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::StatusCode,
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer id path parameters.
///
/// Parses the `{id}` segment as an `i32` and rejects anything else with a
/// 422 and field-level detail, before the handler runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_task(IdPath(id): IdPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ErrorResponse::new(status, "Request validation failed").with_details(
                    serde_json::json!({
                        "id": [{
                            "code": "int_parsing",
                            "message": "value is not a valid integer",
                            "params": {"value": raw},
                        }]
                    }),
                );
                Err((status, Json(body)).into_response())
            }
        }
    }
}
