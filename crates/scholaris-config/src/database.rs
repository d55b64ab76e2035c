//! Store connection settings.
//!
//! - `DATABASE_URL`: SQLite connection string
//!   (default `sqlite://scholaris.db?mode=rwc`, created on first start)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 5)

use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://scholaris.db?mode=rwc".to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(5),
        }
    }
}
