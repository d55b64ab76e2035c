use sqlx::{FromRow, SqlitePool};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use scholaris_auth::create_token;
use scholaris_config::JwtConfig;
use scholaris_core::{AppError, Role, verify_password};
use scholaris_models::LoginRequest;

/// The row needed to check a password and sign a token.
#[derive(Debug, FromRow)]
struct Credentials {
    id: Uuid,
    name: String,
    password: String,
}

pub struct AuthService;

impl AuthService {
    /// The store holding `role` records.
    pub fn table(role: Role) -> &'static str {
        match role {
            Role::Director => "directors",
            Role::Hod => "hods",
            Role::Teacher => "teachers",
            Role::Student => "students",
        }
    }

    /// Checks credentials against `role`'s store and issues a token.
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login(
        db: &SqlitePool,
        role: Role,
        dto: &LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let sql = format!(
            "SELECT id, name, password FROM {} WHERE email = ?",
            Self::table(role)
        );

        let Some(user) = sqlx::query_as::<_, Credentials>(&sql)
            .bind(&dto.email)
            .fetch_optional(db)
            .await?
        else {
            warn!(role = %role, reason = "unknown email", "Login failed");
            return Err(AppError::invalid_credentials("Invalid email"));
        };

        if !verify_password(&dto.password, &user.password)? {
            warn!(role = %role, reason = "wrong password", "Login failed");
            return Err(AppError::invalid_credentials("Wrong password"));
        }

        let token = create_token(user.id, &user.name, role, jwt_config)?;
        info!(role = %role, id = %user.id, "Login succeeded");

        Ok(token)
    }

    /// Whether `email` is already registered in `role`'s store.
    pub async fn email_taken(db: &SqlitePool, role: Role, email: &str) -> Result<bool, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE email = ?", Self::table(role));

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(email)
            .fetch_one(db)
            .await?;

        Ok(count > 0)
    }

    /// Fails with `Forbidden` when the approving principal has since been
    /// deleted from its store.
    pub async fn ensure_principal_exists(
        db: &SqlitePool,
        role: Role,
        id: Uuid,
    ) -> Result<(), AppError> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?", Self::table(role));

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(id)
            .fetch_one(db)
            .await?;

        if count == 0 {
            warn!(role = %role, id = %id, "Token principal no longer exists");
            return Err(AppError::forbidden(format!("{} account no longer exists", role)));
        }

        Ok(())
    }
}
