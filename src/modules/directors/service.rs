use sqlx::SqlitePool;
use tracing::{info, instrument};

use scholaris_core::{AppError, Role, hash_password};
use scholaris_db::insert_director;
use scholaris_models::{Director, RegisterDirectorDto};

use crate::modules::auth::service::AuthService;
use crate::modules::insert_error;

const CONFLICT: &str = "Director already exists";

pub struct DirectorService;

impl DirectorService {
    /// Registers a hierarchy root. Directors have no approver.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register(
        db: &SqlitePool,
        dto: RegisterDirectorDto,
        bcrypt_cost: u32,
    ) -> Result<Director, AppError> {
        if AuthService::email_taken(db, Role::Director, &dto.email).await? {
            return Err(AppError::conflict(CONFLICT));
        }

        let hashed_password = hash_password(&dto.password, bcrypt_cost)?;

        let director = insert_director(db, &dto.name, &dto.email, &hashed_password)
            .await
            .map_err(|e| insert_error(e, CONFLICT))?;

        info!(role = %Role::Director, id = %director.id, "Principal registered");
        Ok(director)
    }
}
