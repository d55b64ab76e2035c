use std::env;

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let origins =
            env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::from_list(&origins)
    }

    /// Builds the config from a comma-separated origin list.
    ///
    /// Credentialed CORS cannot use a wildcard origin, so `*` entries are
    /// dropped.
    pub fn from_list(origins: &str) -> Self {
        let allowed_origins = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| {
                if s == "*" {
                    tracing::warn!("Ignoring wildcard entry in ALLOWED_ORIGINS");
                    return false;
                }
                true
            })
            .collect();

        Self { allowed_origins }
    }
}
