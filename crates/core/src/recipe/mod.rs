mod seed;
mod types;

pub use seed::builtin_recipes;
pub use types::Recipe;
