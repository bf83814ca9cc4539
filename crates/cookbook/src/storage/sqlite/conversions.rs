//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and the domain model.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use cookbook_core::recipe::Recipe;
use cookbook_core::storage::RepositoryError;

/// Convert a SQLite row to a Recipe.
///
/// Expected columns: id, title, description, prepTime, cookTime, servings,
/// calories, ingredients, instructions, imageUrl, createdAt, updatedAt
pub fn row_to_recipe(row: &Row) -> rusqlite::Result<Recipe> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: String = row.get(2)?;
    let prep_time: i64 = row.get(3)?;
    let cook_time: i64 = row.get(4)?;
    let servings: i64 = row.get(5)?;
    let calories: i64 = row.get(6)?;
    let ingredients: String = row.get(7)?;
    let instructions: String = row.get(8)?;
    let image_url: Option<String> = row.get(9)?;
    let created_at: String = row.get(10)?;
    let updated_at: String = row.get(11)?;

    Ok(Recipe {
        id,
        title,
        description,
        prep_time: parse_non_negative(3, prep_time)?,
        cook_time: parse_non_negative(4, cook_time)?,
        servings: parse_non_negative(5, servings)?,
        calories: parse_non_negative(6, calories)?,
        ingredients: parse_string_list(7, &ingredients)?,
        instructions: parse_string_list(8, &instructions)?,
        image_url,
        created_at: parse_datetime(10, &created_at)?,
        updated_at: parse_datetime(11, &updated_at)?,
    })
}

/// Serialize an ordered string list for TEXT storage (JSON array).
pub fn string_list_to_json(items: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(items).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Parse a JSON array of strings from a TEXT column.
///
/// A column that does not parse means the stored data is corrupt; this
/// fails the whole read rather than truncating the list.
fn parse_string_list(idx: usize, json: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a non-negative INTEGER column into a u32.
fn parse_non_negative(idx: usize, value: i64) -> rusqlite::Result<u32> {
    u32::try_from(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Integer, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 text.
fn parse_datetime(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
