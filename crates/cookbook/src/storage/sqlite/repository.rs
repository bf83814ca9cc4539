//! SQLite repository implementation.
//!
//! Implements the repository trait from `cookbook_core::storage` on top of
//! a single connection living on a dedicated thread.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use cookbook_core::recipe::Recipe;
use cookbook_core::storage::{RecipeRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_recipe, string_list_to_json};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::migrations;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based recipe repository.
///
/// Owns the process's database handle: construct one instance at startup
/// and share it (behind an `Arc<dyn RecipeRepository>`) for the process
/// lifetime. The SQLite engine serializes writers; no additional locking
/// happens here.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens the database file at `path`, creating it if absent.
    ///
    /// Enables WAL journaling and foreign-key enforcement, then applies any
    /// pending schema migrations before returning. Failure to open is
    /// surfaced as [`RepositoryError::ConnectionFailed`]; there is no
    /// fallback and no retry.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn, true).await
    }

    /// Opens a private in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        // WAL journaling does not apply to in-memory databases.
        Self::init(conn, false).await
    }

    async fn init(conn: Connection, wal: bool) -> Result<Self> {
        conn.call(move |conn| {
            if wal {
                let _: String = conn
                    .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
                    .map_err(wrap_err)?;
            }
            conn.pragma_update(None, "foreign_keys", "ON")
                .map_err(wrap_err)?;
            migrations::run_migrations(conn).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl RecipeRepository for SqliteRepository {
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let id_param = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_RECIPE_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_param], row_to_recipe) {
                    Ok(recipe) => Ok(Some(recipe)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_RECIPES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_recipe).map_err(wrap_err)?;

                let mut recipes = Vec::new();
                for row_result in rows {
                    recipes.push(row_result.map_err(wrap_err)?);
                }
                Ok(recipes)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_recipes(&self) -> Result<u64> {
        let count = self
            .conn
            .call(|conn| {
                conn.query_row(schema::COUNT_RECIPES, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        Ok(count as u64)
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<()> {
        let id = recipe.id.clone();
        let title = recipe.title.clone();
        let description = recipe.description.clone();
        let prep_time = i64::from(recipe.prep_time);
        let cook_time = i64::from(recipe.cook_time);
        let servings = i64::from(recipe.servings);
        let calories = i64::from(recipe.calories);
        let ingredients = string_list_to_json(&recipe.ingredients)?;
        let instructions = string_list_to_json(&recipe.instructions)?;
        let image_url = recipe.image_url.clone();
        let created_at = format_datetime(&recipe.created_at);
        let updated_at = format_datetime(&recipe.updated_at);
        let recipe_id = recipe.id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_RECIPE,
                    rusqlite::params![
                        id,
                        title,
                        description,
                        prep_time,
                        cook_time,
                        servings,
                        calories,
                        ingredients,
                        instructions,
                        image_url,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, recipe_id))
    }

    async fn update_recipe(&self, recipe: &Recipe) -> Result<bool> {
        let id = recipe.id.clone();
        let title = recipe.title.clone();
        let description = recipe.description.clone();
        let prep_time = i64::from(recipe.prep_time);
        let cook_time = i64::from(recipe.cook_time);
        let servings = i64::from(recipe.servings);
        let calories = i64::from(recipe.calories);
        let ingredients = string_list_to_json(&recipe.ingredients)?;
        let instructions = string_list_to_json(&recipe.instructions)?;
        let image_url = recipe.image_url.clone();
        let updated_at = format_datetime(&recipe.updated_at);
        let recipe_id = recipe.id.clone();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_RECIPE,
                    rusqlite::params![
                        id,
                        title,
                        description,
                        prep_time,
                        cook_time,
                        servings,
                        calories,
                        ingredients,
                        instructions,
                        image_url,
                        updated_at
                    ],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, recipe_id))?;

        Ok(rows > 0)
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let id_param = id.to_string();

        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_RECIPE, [&id_param])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))?;

        Ok(rows > 0)
    }
}
