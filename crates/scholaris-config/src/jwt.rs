use std::env;

/// One day, the lifetime of every issued token unless overridden.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

const DEVELOPMENT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET is not set, falling back to the development secret");
            DEVELOPMENT_SECRET.to_string()
        });

        Self {
            secret,
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|expiry: &i64| *expiry > 0)
                .unwrap_or(DEFAULT_TOKEN_EXPIRY),
        }
    }
}
