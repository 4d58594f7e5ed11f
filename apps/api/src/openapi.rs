use utoipa::OpenApi;

/// Combined OpenAPI documentation for the TaskFlow API
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "TaskFlow API",
        version = "1.0.0",
        description = "A task management backend: tasks organized into categories, \
                       with filtering by status, priority, and category."
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/categories", api = domain_categories::handlers::ApiDoc),
        (path = "/tasks", api = domain_tasks::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
