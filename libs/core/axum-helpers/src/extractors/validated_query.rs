//! Query string extractor with envelope-consistent rejections.

use crate::errors::{ErrorResponse, validation_details};
use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::StatusCode,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with automatic validation.
///
/// Deserializes the query string and validates the result with the
/// `validator` crate. Unparseable values (such as an unknown enum variant in
/// a filter parameter) are rejected with 422 and the standard error envelope
/// instead of axum's plain-text 400.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct ListFilter {
///     done: Option<bool>,
/// }
///
/// async fn list_tasks(ValidatedQuery(filter): ValidatedQuery<ListFilter>) -> String {
///     format!("done filter: {:?}", filter.done)
/// }
///
/// let app = Router::new().route("/tasks", get(list_tasks));
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                let body = ErrorResponse::new(status, e.body_text());
                (status, Json(body)).into_response()
            })?;

        data.validate().map_err(|e| {
            let status = StatusCode::UNPROCESSABLE_ENTITY;
            let body = ErrorResponse::new(status, "Request validation failed")
                .with_details(validation_details(&e));

            (status, Json(body)).into_response()
        })?;

        Ok(ValidatedQuery(data))
    }
}
