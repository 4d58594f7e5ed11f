//! Handler tests for the Categories domain
//!
//! These tests drive the HTTP handlers through tower's `oneshot` against the
//! in-memory repository: request deserialization, status codes, and the
//! error envelope, without a running database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_categories::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    let repo = InMemoryCategoryRepository::new();
    let service = CategoryService::new(repo);
    handlers::router(service)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_create_category_returns_201() {
    let app = app();

    let request = post_json("/", json!({"name": "Work", "color": "#3B82F6"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let category: Category = json_body(response.into_body()).await;
    assert_eq!(category.name, "Work");
    assert_eq!(category.color.as_deref(), Some("#3B82F6"));
}

#[tokio::test]
async fn test_create_duplicate_category_returns_409() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/", json!({"name": "Work"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/", json!({"name": "Work"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status_code"], 409);
    assert_eq!(body["message"], "Category with name 'Work' already exists");
}

#[tokio::test]
async fn test_create_category_with_invalid_color_returns_422() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": "Work", "color": "blue"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status_code"], 422);
    assert!(body["details"]["color"].is_array());
}

#[tokio::test]
async fn test_create_category_with_empty_name_returns_422() {
    let app = app();

    let response = app
        .oneshot(post_json("/", json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_category_returns_200() {
    let repo = InMemoryCategoryRepository::new();
    let service = CategoryService::new(repo);

    let created = service
        .create_category(CreateCategory {
            name: "Personal".to_string(),
            color: Some("#10B981".to_string()),
        })
        .await
        .unwrap();

    let app = handlers::router(service);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let category: Category = json_body(response.into_body()).await;
    assert_eq!(category, created);
}

#[tokio::test]
async fn test_get_missing_category_returns_404() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/999")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Category with id '999' not found");
    assert_eq!(body["status_code"], 404);
    assert_eq!(body["details"], json!({}));
}

#[tokio::test]
async fn test_get_category_with_non_integer_id_returns_422() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-number")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["details"]["id"][0]["code"], "int_parsing");
}

#[tokio::test]
async fn test_list_categories_returns_sorted_with_total() {
    let repo = InMemoryCategoryRepository::new();
    let service = CategoryService::new(repo);

    for name in ["Work", "Errands", "Personal"] {
        service
            .create_category(CreateCategory {
                name: name.to_string(),
                color: None,
            })
            .await
            .unwrap();
    }

    let app = handlers::router(service);
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list: CategoryListResponse = json_body(response.into_body()).await;
    assert_eq!(list.total, 3);
    let names: Vec<&str> = list.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Errands", "Personal", "Work"]);
}

#[tokio::test]
async fn test_list_categories_empty() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let list: CategoryListResponse = json_body(response.into_body()).await;
    assert_eq!(list.total, 0);
    assert!(list.categories.is_empty());
}
