//! Tasks Domain
//!
//! Complete domain implementation for tasks: HTTP handlers, business logic
//! with cross-entity category validation, and persistence behind a
//! repository trait. Tasks optionally reference a category from
//! [`domain_categories`]; reads attach the referenced category eagerly.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_categories::repository::InMemoryCategoryRepository;
//! use domain_tasks::{
//!     handlers,
//!     repository::InMemoryTaskRepository,
//!     service::TaskService,
//! };
//!
//! let categories = InMemoryCategoryRepository::new();
//! let tasks = InMemoryTaskRepository::new(categories.clone());
//! let service = TaskService::new(tasks, categories);
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use models::{
    CreateTask, Task, TaskFilter, TaskListResponse, TaskPriority, TaskStatus, TaskStatusUpdate,
    UpdateTask,
};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
