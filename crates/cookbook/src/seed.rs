//! First-run seeding.
//!
//! A fresh install starts with a small set of built-in recipes so the list
//! screen is never empty. Seeding goes through the repository's create
//! operation, so seeded rows take the same serialization path as
//! user-created ones.

use cookbook_core::recipe::builtin_recipes;
use cookbook_core::storage::{RecipeRepository, RepositoryError, Result};

/// Inserts the built-in sample recipes when the store is empty.
///
/// Idempotent and safe to call on every screen focus: a populated table is
/// left untouched. Built-in ids are fixed, so when two near-simultaneous
/// first launches both pass the emptiness check, the loser of each insert
/// hits the primary key and is skipped rather than duplicated.
///
/// Returns the number of recipes inserted.
pub async fn seed_builtin_recipes(repo: &dyn RecipeRepository) -> Result<usize> {
    if repo.count_recipes().await? > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for recipe in builtin_recipes() {
        match repo.create_recipe(&recipe).await {
            Ok(()) => inserted += 1,
            // Another launch seeded this record between our count and insert.
            Err(RepositoryError::AlreadyExists { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    tracing::info!(inserted, "seeded built-in recipes");
    Ok(inserted)
}
