use async_trait::async_trait;
use chrono::Utc;
use domain_categories::models::Category;
use domain_categories::repository::{CategoryRepository, InMemoryCategoryRepository};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask};

/// Repository trait for Task persistence
///
/// Reads return tasks with their referenced category already attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List tasks matching the filter, ordered by creation time descending
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>>;

    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Apply a partial update to an existing task
    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task>;

    /// Update only the status of a task
    async fn update_status(&self, id: i32, status: TaskStatus) -> TaskResult<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: i32) -> TaskResult<bool>;

    /// Count tasks matching the filter; same predicate as `list`
    async fn count(&self, filter: TaskFilter) -> TaskResult<u64>;
}

/// In-memory implementation of TaskRepository (for development/testing)
///
/// Shares the category store so reads can attach the referenced category
/// the same way the Postgres implementation joins it.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<i32, Task>>>,
    next_id: Arc<AtomicI32>,
    categories: InMemoryCategoryRepository,
}

impl InMemoryTaskRepository {
    pub fn new(categories: InMemoryCategoryRepository) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            categories,
        }
    }

    async fn resolve_category(&self, category_id: Option<i32>) -> TaskResult<Option<Category>> {
        match category_id {
            Some(id) => self
                .categories
                .get_by_id(id)
                .await
                .map_err(|e| TaskError::Internal(e.to_string())),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        // Newest first
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        // Re-resolve categories so deletions are reflected
        drop(tasks);
        for task in &mut result {
            task.category = self.resolve_category(task.category_id).await?;
        }

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        let task = {
            let tasks = self.tasks.read().await;
            tasks.get(&id).cloned()
        };

        match task {
            Some(mut task) => {
                task.category = self.resolve_category(task.category_id).await?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let category = self.resolve_category(input.category_id).await?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            category_id: input.category_id,
            category,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        };

        let mut tasks = self.tasks.write().await;
        tasks.insert(id, task.clone());

        tracing::info!(task_id = id, "Created task");
        Ok(task)
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        let mut updated = {
            let mut tasks = self.tasks.write().await;
            let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
            task.apply_update(input);
            task.clone()
        };

        updated.category = self.resolve_category(updated.category_id).await?;

        tracing::info!(task_id = id, "Updated task");
        Ok(updated)
    }

    async fn update_status(&self, id: i32, status: TaskStatus) -> TaskResult<Task> {
        let mut updated = {
            let mut tasks = self.tasks.write().await;
            let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
            task.status = status;
            task.updated_at = Utc::now();
            task.clone()
        };

        updated.category = self.resolve_category(updated.category_id).await?;

        tracing::info!(task_id = id, status = %status, "Updated task status");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self, filter: TaskFilter) -> TaskResult<u64> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().filter(|t| filter.matches(t)).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;
    use domain_categories::models::CreateCategory;

    fn repo() -> InMemoryTaskRepository {
        InMemoryTaskRepository::new(InMemoryCategoryRepository::new())
    }

    fn new_task(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            category_id: None,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_task() {
        let repo = repo();

        let created = repo.create(new_task("Write report")).await.unwrap();
        assert_eq!(created.title, "Write report");
        assert_eq!(created.status, TaskStatus::Todo);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_create_attaches_category() {
        let categories = InMemoryCategoryRepository::new();
        let category = categories
            .create(CreateCategory {
                name: "Work".to_string(),
                color: None,
            })
            .await
            .unwrap();

        let repo = InMemoryTaskRepository::new(categories);
        let task = repo
            .create(CreateTask {
                category_id: Some(category.id),
                ..new_task("Categorized")
            })
            .await
            .unwrap();

        assert_eq!(task.category.as_ref().map(|c| c.name.as_str()), Some("Work"));
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let repo = repo();

        let result = repo.update(404, UpdateTask::default()).await;
        assert!(matches!(result, Err(TaskError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_count_matches_list_filter() {
        let repo = repo();

        repo.create(new_task("a")).await.unwrap();
        let task = repo.create(new_task("b")).await.unwrap();
        repo.update_status(task.id, TaskStatus::Completed)
            .await
            .unwrap();

        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        let listed = repo.list(filter.clone()).await.unwrap();
        let counted = repo.count(filter).await.unwrap();

        assert_eq!(listed.len() as u64, counted);
        assert_eq!(counted, 1);
    }
}
