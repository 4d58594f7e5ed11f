use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let status = StatusCode::NOT_FOUND;
    let body = Json(ErrorResponse::new(
        status,
        "The requested resource was not found",
    ));

    (status, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    let body = Json(ErrorResponse::new(
        status,
        "The HTTP method is not allowed for this resource",
    ));

    (status, body).into_response()
}
