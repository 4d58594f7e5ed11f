//! CORS layer construction from configuration.

use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use tower_http::cors::CorsLayer;

/// Build a CORS layer from the configured allowed origins.
///
/// Origins that fail to parse as header values are skipped with a warning
/// rather than aborting startup.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_layer_from_defaults() {
        // Just verifies construction doesn't panic on the default origin list.
        let _layer = create_cors_layer(&CorsConfig::default());
    }
}
