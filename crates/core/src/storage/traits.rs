use async_trait::async_trait;

use crate::recipe::Recipe;

use super::Result;

/// Repository for recipe persistence.
///
/// Implemented by every storage backend; callers hold a
/// `dyn RecipeRepository` and never learn which backend is behind it.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Gets a recipe by its id, or `None` when no row matches.
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>>;

    /// Returns every stored recipe.
    ///
    /// Order across rows is storage order; callers wanting a particular
    /// order sort the result themselves.
    async fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Counts stored recipes.
    async fn count_recipes(&self) -> Result<u64>;

    /// Inserts a new recipe.
    ///
    /// Fails with [`RepositoryError::AlreadyExists`] when the id is taken.
    ///
    /// [`RepositoryError::AlreadyExists`]: super::RepositoryError::AlreadyExists
    async fn create_recipe(&self, recipe: &Recipe) -> Result<()>;

    /// Overwrites every mutable field of the stored recipe with the same id.
    ///
    /// `id` and `created_at` are never written; callers refresh
    /// `updated_at` (see [`Recipe::touch`]) before updating. Returns `false`
    /// when no row matched; callers that require existence treat that as a
    /// soft failure, not an error.
    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool>;

    /// Deletes the recipe with the given id.
    ///
    /// Returns `false` when no row matched.
    async fn delete_recipe(&self, id: &str) -> Result<bool>;
}
