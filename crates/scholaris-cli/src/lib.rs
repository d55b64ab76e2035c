//! # Scholaris CLI
//!
//! Administrative helpers used by the `scholaris-cli` binary.
//!
//! The hierarchy root has no superior to register it, so deployments that
//! disable open Director signup bootstrap their first Director here.
//!
//! ```ignore
//! use scholaris_cli::create_director;
//!
//! let id = create_director(&pool, "Ada", "ada@school.io", "secret", 10).await?;
//! ```

use anyhow::{Context, bail};
use sqlx::SqlitePool;
use uuid::Uuid;

use scholaris_core::hash_password;
use scholaris_db::insert_director;

/// Inserts a Director with no approver and returns its id.
pub async fn create_director(
    db: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
    bcrypt_cost: u32,
) -> anyhow::Result<Uuid> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        bail!("name, email and password are required");
    }

    let exists =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM directors WHERE email = ?")
            .bind(email)
            .fetch_one(db)
            .await?;
    if exists > 0 {
        bail!("A Director with email {} already exists", email);
    }

    let hashed = hash_password(password, bcrypt_cost)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.error))?;

    let director = insert_director(db, name, email, &hashed)
        .await
        .context("Failed to insert director")?;

    Ok(director.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholaris_db::{init_memory_pool, run_migrations};

    async fn pool() -> SqlitePool {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_director_stores_hashed_password() {
        let db = pool().await;
        let id = create_director(&db, "Ada", "ada@school.io", "secret", 4)
            .await
            .unwrap();

        let (stored_id, hash, approved_by): (Uuid, String, Option<Uuid>) = sqlx::query_as(
            "SELECT id, password, approved_by FROM directors WHERE email = 'ada@school.io'",
        )
        .fetch_one(&db)
        .await
        .unwrap();

        assert_eq!(stored_id, id);
        assert_ne!(hash, "secret");
        assert!(scholaris_core::verify_password("secret", &hash).unwrap());
        assert!(approved_by.is_none());
    }

    #[tokio::test]
    async fn test_create_director_rejects_duplicate_email() {
        let db = pool().await;
        create_director(&db, "Ada", "ada@school.io", "secret", 4)
            .await
            .unwrap();

        let err = create_director(&db, "Other", "ada@school.io", "secret", 4)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_director_requires_fields() {
        let db = pool().await;
        assert!(create_director(&db, "", "a@b.io", "x", 4).await.is_err());
        assert!(create_director(&db, "A", "a@b.io", "", 4).await.is_err());
    }
}
