use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use domain_categories::{CategoryService, PgCategoryRepository};
use domain_tasks::{PgTaskRepository, TaskService};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

/// Build the API routes backed by Postgres repositories
pub fn routes(db: &DatabaseConnection) -> Router {
    let category_service = CategoryService::new(PgCategoryRepository::new(db.clone()));
    let task_service = TaskService::new(
        PgTaskRepository::new(db.clone()),
        PgCategoryRepository::new(db.clone()),
    );

    Router::new()
        .nest("/categories", domain_categories::handlers::router(category_service))
        .nest("/tasks", domain_tasks::handlers::router(task_service))
}

/// Root endpoint providing API metadata and pointers to the docs
async fn root(State(app): State<AppInfo>) -> Json<Value> {
    Json(json!({
        "name": app.name,
        "version": app.version,
        "docs": "/swagger-ui",
        "redoc": "/redoc",
        "health": "/health",
    }))
}

/// Router for the root metadata endpoint
pub fn root_router(app_info: AppInfo) -> Router {
    Router::new().route("/", get(root)).with_state(app_info)
}
