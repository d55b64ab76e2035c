//! # Scholaris DB
//!
//! Connection pool creation and schema migrations for the credential store.
//!
//! The store is SQLite with one table per role (`directors`, `hods`,
//! `teachers`, `students`), each with a unique email column. Migrations live
//! in the workspace `migrations/` directory and are embedded at compile time.
//!
//! # Example
//!
//! ```ignore
//! use scholaris_config::DatabaseConfig;
//! use scholaris_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use scholaris_config::DatabaseConfig;

pub mod directors;

pub use directors::insert_director;

// Re-export SqlitePool for convenience
pub use sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a pool against `config.url`, creating the database file if needed.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(url = %config.url, "Database pool ready");
    Ok(pool)
}

/// A private in-memory database.
///
/// The pool holds exactly one connection that is never recycled, since
/// every SQLite memory connection is its own database.
pub async fn init_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_create_role_tables() {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('directors', 'hods', 'teachers', 'students') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert_eq!(names, vec!["directors", "hods", "students", "teachers"]);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
