use domain_categories::repository::CategoryRepository;
use std::sync::Arc;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, TaskListResponse, TaskStatusUpdate, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Holds both repositories: category existence is validated here whenever a
/// task references one.
#[derive(Clone)]
pub struct TaskService<T: TaskRepository, C: CategoryRepository> {
    tasks: Arc<T>,
    categories: Arc<C>,
}

impl<T: TaskRepository, C: CategoryRepository> TaskService<T, C> {
    pub fn new(tasks: T, categories: C) -> Self {
        Self {
            tasks: Arc::new(tasks),
            categories: Arc::new(categories),
        }
    }

    async fn ensure_category_exists(&self, category_id: i32) -> TaskResult<()> {
        let category = self
            .categories
            .get_by_id(category_id)
            .await
            .map_err(|e| TaskError::Internal(e.to_string()))?;

        if category.is_none() {
            return Err(TaskError::CategoryNotFound(category_id));
        }

        Ok(())
    }

    /// List tasks matching the filter, with the matching total
    ///
    /// The total is computed with the same filter predicate as the list, so
    /// the two always agree.
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskResult<TaskListResponse> {
        if let Some(category_id) = filter.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let tasks = self.tasks.list(filter.clone()).await?;
        let total = self.tasks.count(filter).await?;

        Ok(TaskListResponse { tasks, total })
    }

    /// Create a new task, validating any category reference
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        if let Some(category_id) = input.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        self.tasks.create(input).await
    }

    /// Get a task by ID
    pub async fn get_task(&self, id: i32) -> TaskResult<Task> {
        self.tasks
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Apply a partial update to a task
    pub async fn update_task(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        // A reassignment to a category must reference an existing one;
        // clearing the assignment (explicit null) needs no check.
        if let Some(Some(category_id)) = input.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        self.tasks.update(id, input).await
    }

    /// Update only the status of a task
    pub async fn update_task_status(&self, id: i32, input: TaskStatusUpdate) -> TaskResult<Task> {
        self.tasks.update_status(id, input.status).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: i32) -> TaskResult<()> {
        let deleted = self.tasks.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
