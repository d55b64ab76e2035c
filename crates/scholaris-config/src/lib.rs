//! # Scholaris Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed cross-origin hosts
//! - [`database`]: store connection string and pool size
//! - [`server`]: listen address
//! - [`password`]: bcrypt work factor
//! - [`registration`]: whether the hierarchy root may self-register
//! - [`logging`]: log format and optional file output
//!
//! Everything is gathered once at startup into [`AppConfig`] and handed to
//! the application state; nothing reads the environment after that.
//!
//! # Example
//!
//! ```ignore
//! use scholaris_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.server.addr());
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod logging;
pub mod password;
pub mod registration;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use logging::{LogConfig, LogFormat};
pub use password::PasswordConfig;
pub use registration::RegistrationConfig;
pub use server::ServerConfig;

/// The complete runtime configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub server: ServerConfig,
    pub password: PasswordConfig,
    pub registration: RegistrationConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
            server: ServerConfig::from_env(),
            password: PasswordConfig::from_env(),
            registration: RegistrationConfig::from_env(),
            logging: LogConfig::from_env(),
        }
    }
}

/// Parses the usual spellings of a boolean environment flag.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
