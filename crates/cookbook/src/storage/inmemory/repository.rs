//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cookbook_core::recipe::Recipe;
use cookbook_core::storage::{RecipeRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Data
/// is not persisted and is lost when the last handle is dropped. Iteration
/// order over a HashMap is arbitrary, which is within the repository
/// contract: row order is unspecified unless the caller imposes one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    recipes: Arc<RwLock<HashMap<String, Recipe>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.get(id).cloned())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.recipes.read().await;
        Ok(recipes.values().cloned().collect())
    }

    async fn count_recipes(&self) -> Result<u64> {
        let recipes = self.recipes.read().await;
        Ok(recipes.len() as u64)
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let mut recipes = self.recipes.write().await;
        if recipes.contains_key(&recipe.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Recipe",
                id: recipe.id.clone(),
            });
        }
        recipes.insert(recipe.id.clone(), recipe.clone());
        Ok(())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        let mut recipes = self.recipes.write().await;
        match recipes.get_mut(&recipe.id) {
            Some(stored) => {
                // created_at is immutable, like the SQL statement that
                // never writes the createdAt column.
                let created_at = stored.created_at;
                *stored = recipe.clone();
                stored.created_at = created_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let mut recipes = self.recipes.write().await;
        Ok(recipes.remove(id).is_some())
    }
}
