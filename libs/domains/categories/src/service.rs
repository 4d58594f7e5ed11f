use std::sync::Arc;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CategoryListResponse, CreateCategory};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories with their total count
    pub async fn list_categories(&self) -> CategoryResult<CategoryListResponse> {
        let categories = self.repository.list().await?;
        let total = categories.len() as u64;

        Ok(CategoryListResponse { categories, total })
    }

    /// Create a new category, rejecting duplicate names
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(e.to_string()))?;

        if let Some(existing) = self.repository.get_by_name(&input.name).await? {
            return Err(CategoryError::DuplicateName(existing.name));
        }

        self.repository.create(input).await
    }

    /// Get a category by ID
    pub async fn get_category(&self, id: i32) -> CategoryResult<Category> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Delete a category
    pub async fn delete_category(&self, id: i32) -> CategoryResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_category_rejects_duplicate_name() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_get_by_name()
            .with(eq("Work"))
            .returning(|name| {
                Ok(Some(Category {
                    id: 1,
                    name: name.to_string(),
                    color: None,
                }))
            });

        let service = CategoryService::new(mock_repo);
        let result = service
            .create_category(CreateCategory {
                name: "Work".to_string(),
                color: None,
            })
            .await;

        assert!(matches!(result, Err(CategoryError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_create_category_passes_through_when_name_free() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_get_by_name()
            .with(eq("Personal"))
            .returning(|_| Ok(None));
        mock_repo.expect_create().returning(|input| {
            Ok(Category {
                id: 7,
                name: input.name,
                color: input.color,
            })
        });

        let service = CategoryService::new(mock_repo);
        let category = service
            .create_category(CreateCategory {
                name: "Personal".to_string(),
                color: Some("#10B981".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Personal");
    }

    #[tokio::test]
    async fn test_create_category_rejects_invalid_color_before_repo_access() {
        // No expectations set: any repository call would panic
        let mock_repo = MockCategoryRepository::new();

        let service = CategoryService::new(mock_repo);
        let result = service
            .create_category(CreateCategory {
                name: "Work".to_string(),
                color: Some("not-a-color".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_get_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.get_category(999).await;

        assert!(matches!(result, Err(CategoryError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_list_categories_reports_total() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_list().returning(|| {
            Ok(vec![
                Category {
                    id: 1,
                    name: "Personal".to_string(),
                    color: None,
                },
                Category {
                    id: 2,
                    name: "Work".to_string(),
                    color: Some("#3B82F6".to_string()),
                },
            ])
        });

        let service = CategoryService::new(mock_repo);
        let response = service.list_categories().await.unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_delete()
            .with(eq(42))
            .returning(|_| Ok(false));

        let service = CategoryService::new(mock_repo);
        let result = service.delete_category(42).await;

        assert!(matches!(result, Err(CategoryError::NotFound(42))));
    }
}
