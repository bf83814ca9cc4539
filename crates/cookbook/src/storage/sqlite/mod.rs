//! SQLite storage backend implementation.
//!
//! This module provides the on-device implementation of the repository
//! trait using `rusqlite` for synchronous operations and `tokio-rusqlite`
//! for async wrapping. Schema evolution is handled by the forward-only
//! versioned migrations in the `migrations` module.

mod conversions;
mod error;
mod migrations;
mod repository;
mod schema;

pub use repository::SqliteRepository;
