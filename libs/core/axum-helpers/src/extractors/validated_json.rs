//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ErrorResponse, validation_details};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// Both malformed bodies and failed validation rules are rejected with 422
/// and the standard error envelope, so the service layer only ever sees
/// well-formed input.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateCategory {
///     #[validate(length(min = 1, max = 100))]
///     name: String,
/// }
///
/// async fn create_category(ValidatedJson(payload): ValidatedJson<CreateCategory>) -> String {
///     format!("Creating category: {}", payload.name)
/// }
///
/// let app = Router::new().route("/categories", post(create_category));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let status = StatusCode::UNPROCESSABLE_ENTITY;
            let body = ErrorResponse::new(status, e.body_text());
            (status, axum::Json(body)).into_response()
        })?;

        data.validate().map_err(|e| {
            let status = StatusCode::UNPROCESSABLE_ENTITY;
            let body = ErrorResponse::new(status, "Request validation failed")
                .with_details(validation_details(&e));

            (status, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
