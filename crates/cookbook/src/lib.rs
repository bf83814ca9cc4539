//! On-device recipe store.
//!
//! The persistence engine behind the cookbook app: one SQLite database file
//! per installation, opened once and shared for the process lifetime.
//! Screens construct a [`storage::SqliteRepository`] (or receive a shared
//! one), seed it on first run via [`seed::seed_builtin_recipes`], and go
//! through the [`cookbook_core::storage::RecipeRepository`] trait for every
//! read and write.

pub mod config;
pub mod seed;
pub mod storage;

pub use config::Config;
