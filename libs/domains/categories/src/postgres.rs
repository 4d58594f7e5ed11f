use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::{Category, CreateCategory},
    repository::CategoryRepository,
};

pub struct PgCategoryRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Name)
            .all(self.base.db())
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let model = self
            .base
            .find_by_id(id)
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(self.base.db())
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(|m| m.into()))
    }

    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let name = input.name.clone();
        let active_model: entity::ActiveModel = input.into();

        // The unique index on name is the authoritative duplicate check; the
        // service-layer get_by_name lookup can race under concurrent creates.
        let model = self.base.insert(active_model).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                CategoryError::DuplicateName(name.clone())
            } else {
                CategoryError::Internal(format!("Database error: {}", e))
            }
        })?;

        tracing::info!(category_id = model.id, "Created category");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> CategoryResult<bool> {
        let rows_affected = self
            .base
            .delete_by_id(id)
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))?;

        if rows_affected > 0 {
            tracing::info!(category_id = id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> CategoryResult<u64> {
        entity::Entity::find()
            .count(self.base.db())
            .await
            .map_err(|e| CategoryError::Internal(format!("Database error: {}", e)))
    }
}
