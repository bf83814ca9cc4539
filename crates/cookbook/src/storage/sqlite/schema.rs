//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the SQLite repository lives here as pure data, no I/O.
//! Column names keep the camelCase spelling of the original database files;
//! the database file is the compatibility surface with existing installs.

/// Version marker table. Single row, created once per installation.
pub const CREATE_DB_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS db_version (
    version INTEGER NOT NULL
)
"#;

pub const SELECT_DB_VERSION: &str = "SELECT version FROM db_version";

pub const INIT_DB_VERSION: &str = "INSERT INTO db_version (version) VALUES (0)";

pub const UPDATE_DB_VERSION: &str = "UPDATE db_version SET version = ?1";

/// Migration 1: the recipes table.
///
/// `ingredients` and `instructions` hold JSON arrays of strings; every
/// scalar column except `imageUrl` is NOT NULL.
pub const CREATE_RECIPES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    prepTime INTEGER NOT NULL,
    cookTime INTEGER NOT NULL,
    servings INTEGER NOT NULL,
    calories INTEGER NOT NULL,
    ingredients TEXT NOT NULL,
    instructions TEXT NOT NULL,
    imageUrl TEXT,
    createdAt TEXT NOT NULL,
    updatedAt TEXT NOT NULL
);
"#;

// Recipe queries
pub const INSERT_RECIPE: &str = r#"
INSERT INTO recipes (id, title, description, prepTime, cookTime, servings, calories, ingredients, instructions, imageUrl, createdAt, updatedAt)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub const SELECT_RECIPE_BY_ID: &str = r#"
SELECT id, title, description, prepTime, cookTime, servings, calories, ingredients, instructions, imageUrl, createdAt, updatedAt
FROM recipes
WHERE id = ?1
"#;

/// No ORDER BY: row order is storage order, callers impose their own.
pub const SELECT_ALL_RECIPES: &str = r#"
SELECT id, title, description, prepTime, cookTime, servings, calories, ingredients, instructions, imageUrl, createdAt, updatedAt
FROM recipes
"#;

pub const COUNT_RECIPES: &str = "SELECT COUNT(*) FROM recipes";

/// `id` and `createdAt` are deliberately absent from the SET list; the
/// statement itself keeps them immutable.
pub const UPDATE_RECIPE: &str = r#"
UPDATE recipes
SET title = ?2, description = ?3, prepTime = ?4, cookTime = ?5, servings = ?6,
    calories = ?7, ingredients = ?8, instructions = ?9, imageUrl = ?10, updatedAt = ?11
WHERE id = ?1
"#;

pub const DELETE_RECIPE: &str = r#"
DELETE FROM recipes
WHERE id = ?1
"#;
