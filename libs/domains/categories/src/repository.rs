use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories, ordered by name ascending
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Get a category by ID
    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    /// Get a category by name (used for the uniqueness check)
    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>>;

    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Delete a category by ID
    async fn delete(&self, id: i32) -> CategoryResult<bool>;

    /// Count all categories
    async fn count(&self) -> CategoryResult<u64>;
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<i32, Category>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let categories = self.categories.read().await;

        let mut result: Vec<Category> = categories.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> CategoryResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let mut categories = self.categories.write().await;

        // The write lock makes check-then-insert atomic here
        if categories.values().any(|c| c.name == input.name) {
            return Err(CategoryError::DuplicateName(input.name));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            id,
            name: input.name,
            color: input.color,
        };
        categories.insert(id, category.clone());

        tracing::info!(category_id = id, "Created category");
        Ok(category)
    }

    async fn delete(&self, id: i32) -> CategoryResult<bool> {
        let mut categories = self.categories.write().await;

        if categories.remove(&id).is_some() {
            tracing::info!(category_id = id, "Deleted category");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> CategoryResult<u64> {
        let categories = self.categories.read().await;
        Ok(categories.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_category() {
        let repo = InMemoryCategoryRepository::new();

        let input = CreateCategory {
            name: "Work".to_string(),
            color: Some("#3B82F6".to_string()),
        };

        let category = repo.create(input).await.unwrap();
        assert_eq!(category.name, "Work");
        assert_eq!(category.color.as_deref(), Some("#3B82F6"));

        let fetched = repo.get_by_id(category.id).await.unwrap();
        assert_eq!(fetched, Some(category));
    }

    #[tokio::test]
    async fn test_duplicate_name_error() {
        let repo = InMemoryCategoryRepository::new();

        let input = CreateCategory {
            name: "Work".to_string(),
            color: None,
        };

        repo.create(input.clone()).await.unwrap();

        let result = repo.create(input).await;
        assert!(matches!(result, Err(CategoryError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_list_ordered_by_name() {
        let repo = InMemoryCategoryRepository::new();

        for name in ["Personal", "Work", "Errands"] {
            repo.create(CreateCategory {
                name: name.to_string(),
                color: None,
            })
            .await
            .unwrap();
        }

        let categories = repo.list().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Errands", "Personal", "Work"]);
    }

    #[tokio::test]
    async fn test_delete_category() {
        let repo = InMemoryCategoryRepository::new();

        let category = repo
            .create(CreateCategory {
                name: "Temp".to_string(),
                color: None,
            })
            .await
            .unwrap();

        assert!(repo.delete(category.id).await.unwrap());
        assert!(!repo.delete(category.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
