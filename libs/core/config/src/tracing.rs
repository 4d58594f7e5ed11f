use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration.
///
/// - **Production** (`APP_ENV=production`): JSON format for log aggregation,
///   default filter `info`.
/// - **Development** (default): pretty-printed human-readable format with
///   module targets, default filter `debug`.
///
/// `RUST_LOG` overrides the default filter in both modes. Safe to call
/// multiple times (common in tests); subsequent calls are no-ops.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("debug,tower_http=debug")
        }
    });

    let error_layer = tracing_error::ErrorLayer::default();

    let result = if is_production {
        tracing_subscriber::registry()
            .with(filter)
            .with(error_layer)
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(error_layer)
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .try_init()
    };

    // Already initialized is fine: tests call this repeatedly.
    if result.is_ok() {
        tracing::debug!(
            production = is_production,
            "Tracing subscriber initialized"
        );
    }
}
