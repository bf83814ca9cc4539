use std::env;

/// Store configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "cookbook.db")
    pub database_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COOKBOOK_DB_PATH` - SQLite database path (default: "cookbook.db")
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("COOKBOOK_DB_PATH")
                .unwrap_or_else(|_| "cookbook.db".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
