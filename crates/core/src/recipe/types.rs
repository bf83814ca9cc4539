use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recipe.
///
/// `id` is an opaque string assigned at creation and immutable afterwards.
/// [`Recipe::new`] generates a UUID, but any non-empty string works; seeded
/// records use fixed readable ids. Serializes to camelCase JSON to match the
/// on-disk column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    /// Energy per serving, in kcal.
    pub calories: u32,
    /// Ordered; display order is meaningful.
    pub ingredients: Vec<String>,
    /// Ordered; steps are numbered in display order.
    pub instructions: Vec<String>,
    /// Local file URI or remote URL. `None` means no image.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Creates a new recipe with a generated id and both timestamps set to now.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            calories: 0,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific id (useful for seeding and testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets preparation and cooking times, in minutes.
    pub fn with_times(mut self, prep_time: u32, cook_time: u32) -> Self {
        self.prep_time = prep_time;
        self.cook_time = cook_time;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Sets the ingredient list, preserving order.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the instruction steps, preserving order.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Total time from start to table, in minutes.
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }

    /// Marks the recipe as modified now.
    ///
    /// The edit flow calls this before handing the recipe to
    /// `update_recipe`, keeping `updated_at >= created_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
