//! End-to-end tests for the SQLite recipe repository.

#![cfg(feature = "sqlite")]

use cookbook::seed::seed_builtin_recipes;
use cookbook::storage::SqliteRepository;
use cookbook_core::recipe::{builtin_recipes, Recipe};
use cookbook_core::storage::{RecipeRepository, RepositoryError};

fn tea() -> Recipe {
    Recipe::new("Tea", "Hot leaf juice")
        .with_id("r1")
        .with_times(2, 3)
        .with_servings(1)
        .with_calories(5)
        .with_ingredients(["water", "tea leaves"])
        .with_instructions(["boil water", "steep leaves"])
}

#[tokio::test]
async fn create_then_get_round_trips_every_field() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();
    let recipe = Recipe::new("Shakshuka", "Eggs poached in spiced tomato sauce")
        .with_id("r-shakshuka")
        .with_times(10, 20)
        .with_servings(2)
        .with_calories(380)
        .with_ingredients(["6 eggs", "800 g canned tomatoes", "1 onion", "1 tsp cumin"])
        .with_instructions([
            "Soften the onion with the cumin",
            "Add the tomatoes and reduce",
            "Crack in the eggs and cover until just set",
        ])
        .with_image_url("file:///photos/shakshuka.jpg");

    repo.create_recipe(&recipe).await.unwrap();
    let stored = repo.get_recipe("r-shakshuka").await.unwrap().unwrap();

    assert_eq!(stored, recipe);
    // Order within the lists is part of the contract.
    assert_eq!(stored.ingredients, recipe.ingredients);
    assert_eq!(stored.instructions, recipe.instructions);
}

#[tokio::test]
async fn get_missing_returns_none() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();

    assert_eq!(repo.get_recipe("nope").await.unwrap(), None);
}

#[tokio::test]
async fn duplicate_id_is_a_constraint_error() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();
    repo.create_recipe(&tea()).await.unwrap();

    let mut other = tea();
    other.title = "Different title, same id".to_string();
    let result = repo.create_recipe(&other).await;

    match result {
        Err(RepositoryError::AlreadyExists { entity_type, id }) => {
            assert_eq!(entity_type, "Recipe");
            assert_eq!(id, "r1");
        }
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
}

#[tokio::test]
async fn create_list_delete_scenario() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();

    repo.create_recipe(&tea()).await.unwrap();

    let all = repo.list_recipes().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], tea_with_timestamps(&all[0]));
    assert_eq!(all[0].id, "r1");
    assert_eq!(all[0].ingredients, vec!["water", "tea leaves"]);
    assert_eq!(all[0].instructions, vec!["boil water", "steep leaves"]);

    assert!(repo.delete_recipe("r1").await.unwrap());
    assert!(repo.list_recipes().await.unwrap().is_empty());
}

// The tea fixture regenerates timestamps on every call; compare against the
// stored record's own timestamps.
fn tea_with_timestamps(stored: &Recipe) -> Recipe {
    let mut expected = tea();
    expected.created_at = stored.created_at;
    expected.updated_at = stored.updated_at;
    expected
}

#[tokio::test]
async fn update_overwrites_mutable_fields_only() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();
    let recipe = tea();
    repo.create_recipe(&recipe).await.unwrap();

    let mut edited = recipe.clone();
    edited.title = "Green Tea".to_string();
    edited.servings = 2;
    edited.ingredients.push("honey".to_string());
    // Tampering with created_at must not reach the store.
    edited.created_at = edited.created_at + chrono::Duration::days(1);
    edited.touch();

    assert!(repo.update_recipe(&edited).await.unwrap());

    let stored = repo.get_recipe("r1").await.unwrap().unwrap();
    assert_eq!(stored.title, "Green Tea");
    assert_eq!(stored.servings, 2);
    assert_eq!(
        stored.ingredients,
        vec!["water", "tea leaves", "honey"]
    );
    assert_eq!(stored.created_at, recipe.created_at);
    assert_eq!(stored.updated_at, edited.updated_at);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn update_missing_id_is_a_soft_failure() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();

    assert!(!repo.update_recipe(&tea()).await.unwrap());
}

#[tokio::test]
async fn delete_missing_id_is_a_soft_failure() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();

    assert!(!repo.delete_recipe("r1").await.unwrap());
}

#[tokio::test]
async fn fresh_store_seeds_exactly_once() {
    let repo = SqliteRepository::new_in_memory().await.unwrap();
    assert!(repo.list_recipes().await.unwrap().is_empty());

    let inserted = seed_builtin_recipes(&repo).await.unwrap();
    assert_eq!(inserted, builtin_recipes().len());
    assert_eq!(
        repo.list_recipes().await.unwrap().len(),
        builtin_recipes().len()
    );

    // Second run, e.g. the next screen focus, inserts nothing.
    assert_eq!(seed_builtin_recipes(&repo).await.unwrap(), 0);
    assert_eq!(
        repo.count_recipes().await.unwrap() as usize,
        builtin_recipes().len()
    );
}

#[tokio::test]
async fn data_survives_reopening_the_same_file() {
    let path = std::env::temp_dir().join(format!("cookbook-reopen-{}.db", std::process::id()));
    let path_str = path.to_str().unwrap().to_string();
    let _ = std::fs::remove_file(&path);

    {
        let repo = SqliteRepository::new(&path_str).await.unwrap();
        repo.create_recipe(&tea()).await.unwrap();
    }

    // Reopen: migrations run again (idempotent), data is still there.
    let repo = SqliteRepository::new(&path_str).await.unwrap();
    let stored = repo.get_recipe("r1").await.unwrap().unwrap();
    assert_eq!(stored.title, "Tea");
    assert_eq!(repo.count_recipes().await.unwrap(), 1);

    drop(repo);
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{path_str}{suffix}"));
    }
}
