use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use axum_helpers::{
    IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, ValidationErrorResponse,
    },
};
use domain_categories::repository::CategoryRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{
    CreateTask, Task, TaskFilter, TaskListResponse, TaskPriority, TaskStatus, TaskStatusUpdate,
    UpdateTask,
};
use crate::repository::TaskRepository;
use crate::service::TaskService;

const TAG: &str = "tasks";

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        create_task,
        get_task,
        update_task,
        update_task_status,
        delete_task,
    ),
    components(
        schemas(
            Task,
            CreateTask,
            UpdateTask,
            TaskStatusUpdate,
            TaskListResponse,
            TaskStatus,
            TaskPriority
        ),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the task router with all HTTP endpoints
pub fn router<T, C>(service: TaskService<T, C>) -> Router
where
    T: TaskRepository + 'static,
    C: CategoryRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route(
            "/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/{id}/status", patch(update_task_status))
        .with_state(shared_service)
}

/// List tasks with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(TaskFilter),
    responses(
        (status = 200, description = "Tasks matching the filter with total count", body = TaskListResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    ValidatedQuery(filter): ValidatedQuery<TaskFilter>,
) -> TaskResult<Json<TaskListResponse>> {
    let response = service.list_tasks(filter).await?;
    Ok(Json(response))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Apply a partial update to a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> TaskResult<Json<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Update only the status of a task
#[utoipa::path(
    patch,
    path = "/{id}/status",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = TaskStatusUpdate,
    responses(
        (status = 200, description = "Task status updated successfully", body = Task),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task_status<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<TaskStatusUpdate>,
) -> TaskResult<Json<Task>> {
    let task = service.update_task_status(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<T: TaskRepository, C: CategoryRepository>(
    State(service): State<Arc<TaskService<T, C>>>,
    IdPath(id): IdPath,
) -> TaskResult<impl IntoResponse> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
