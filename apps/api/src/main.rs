use axum_helpers::server::{create_app, create_router, health_router};
use axum_helpers::create_cors_layer;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

    // Compose the API routes and cross-cutting middleware
    let api_routes = api::routes(&db);
    let cors = create_cors_layer(&config.cors);
    let router = create_router::<openapi::ApiDoc>(api_routes, cors);

    // Merge the root metadata and health endpoints
    let app = router
        .merge(api::root_router(config.app.clone()))
        .merge(health_router(config.app.clone()));

    info!(
        service = config.app.name,
        version = config.app.version,
        "Starting TaskFlow API"
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("TaskFlow API shutdown complete");
    Ok(())
}
