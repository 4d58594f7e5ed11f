use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, TaskFilter, TaskStatus, UpdateTask},
    repository::TaskRepository,
};

pub struct PgTaskRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find one task with its category joined
    async fn find_joined(&self, id: i32) -> TaskResult<Option<Task>> {
        let row = entity::Entity::find_by_id(id)
            .find_also_related(domain_categories::entity::Entity)
            .one(self.base.db())
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }
}

/// Apply the AND-combined filter constraints; used by both list and count so
/// the two queries always agree.
fn apply_filter(mut query: Select<entity::Entity>, filter: &TaskFilter) -> Select<entity::Entity> {
    if let Some(status) = filter.status {
        query = query.filter(entity::Column::Status.eq(status));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(entity::Column::Priority.eq(priority));
    }
    if let Some(category_id) = filter.category_id {
        query = query.filter(entity::Column::CategoryId.eq(category_id));
    }
    query
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let rows = apply_filter(entity::Entity::find(), &filter)
            .order_by_desc(entity::Column::CreatedAt)
            .find_also_related(domain_categories::entity::Entity)
            .all(self.base.db())
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> TaskResult<Option<Task>> {
        self.find_joined(id).await
    }

    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = model.id, "Created task");

        // Re-read with the category joined so the response carries it
        self.find_joined(model.id)
            .await?
            .ok_or_else(|| TaskError::Internal("Task vanished after insert".to_string()))
    }

    async fn update(&self, id: i32, input: UpdateTask) -> TaskResult<Task> {
        let mut task = self.find_joined(id).await?.ok_or(TaskError::NotFound(id))?;

        task.apply_update(input);

        let active_model = entity::ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status),
            priority: Set(task.priority),
            category_id: Set(task.category_id),
            due_date: Set(task.due_date.map(|d| d.into())),
            created_at: Set(task.created_at.into()),
            updated_at: Set(task.updated_at.into()),
        };

        self.base
            .update(active_model)
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = id, "Updated task");

        // Re-read: the category reference may have changed
        self.find_joined(id)
            .await?
            .ok_or_else(|| TaskError::Internal("Task vanished after update".to_string()))
    }

    async fn update_status(&self, id: i32, status: TaskStatus) -> TaskResult<Task> {
        let exists = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        if exists.is_none() {
            return Err(TaskError::NotFound(id));
        }

        let active_model = entity::ActiveModel {
            id: Set(id),
            status: Set(status),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        self.base
            .update(active_model)
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = id, status = %status, "Updated task status");

        self.find_joined(id)
            .await?
            .ok_or_else(|| TaskError::Internal("Task vanished after update".to_string()))
    }

    async fn delete(&self, id: i32) -> TaskResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self, filter: TaskFilter) -> TaskResult<u64> {
        apply_filter(entity::Entity::find(), &filter)
            .count(self.base.db())
            .await
            .map_err(|e| TaskError::Internal(format!("Database error: {}", e)))
    }
}
