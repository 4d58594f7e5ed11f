//! HTTP middleware module.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::create_cors_layer;
//! use core_config::cors::CorsConfig;
//!
//! let app = Router::new().layer(create_cors_layer(&CorsConfig::default()));
//! ```

pub mod cors;

pub use cors::create_cors_layer;
