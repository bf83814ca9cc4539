//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `cookbook_core::storage`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): on-device SQLite backend using `rusqlite` and
//!   `tokio-rusqlite`
//! - `inmemory` (default): HashMap-backed backend for tests
//!
//! Both backends can coexist in one build; callers pick one at construction
//! time and hand out an `Arc<dyn RecipeRepository>`.

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p cookbook --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
