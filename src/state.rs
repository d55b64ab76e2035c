use sqlx::SqlitePool;

use scholaris_config::{AppConfig, CorsConfig, JwtConfig, PasswordConfig, RegistrationConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub password_config: PasswordConfig,
    pub registration_config: RegistrationConfig,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &AppConfig) -> Self {
        Self {
            db,
            jwt_config: config.jwt.clone(),
            cors_config: config.cors.clone(),
            password_config: config.password.clone(),
            registration_config: config.registration.clone(),
        }
    }
}
