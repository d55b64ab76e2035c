//! Director inserts shared by the signup route and the admin CLI.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use scholaris_core::Role;
use scholaris_models::Director;

/// Inserts a Director with no approver. `hashed_password` must already be
/// a bcrypt hash.
pub async fn insert_director(
    db: &SqlitePool,
    name: &str,
    email: &str,
    hashed_password: &str,
) -> Result<Director, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Director>(
        r#"
        INSERT INTO directors (id, name, email, password, role, approved_by, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, NULL, ?, ?)
        RETURNING id, name, email, role, approved_by, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(hashed_password)
    .bind(Role::Director.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{init_memory_pool, run_migrations};

    #[tokio::test]
    async fn test_insert_director_has_no_approver() {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        let director = insert_director(&pool, "Ada", "ada@school.io", "$2b$04$hash")
            .await
            .unwrap();

        assert_eq!(director.role, Role::Director);
        assert_eq!(director.email, "ada@school.io");
        assert!(director.approved_by.is_none());
    }

    #[tokio::test]
    async fn test_insert_director_rejects_duplicate_email() {
        let pool = init_memory_pool().await.unwrap();
        run_migrations(&pool).await.unwrap();

        insert_director(&pool, "Ada", "ada@school.io", "h").await.unwrap();
        let err = insert_director(&pool, "Other", "ada@school.io", "h")
            .await
            .unwrap_err();

        assert!(
            err.as_database_error()
                .is_some_and(|e| e.is_unique_violation())
        );
    }
}
