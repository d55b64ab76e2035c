use std::env;

use crate::parse_flag;

/// Controls the unauthenticated bootstrap route for the hierarchy root.
///
/// With `ALLOW_DIRECTOR_SIGNUP=false` Directors can only be created through
/// `scholaris-cli create-director`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub allow_director_signup: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            allow_director_signup: true,
        }
    }
}

impl RegistrationConfig {
    pub fn from_env() -> Self {
        Self {
            allow_director_signup: env::var("ALLOW_DIRECTOR_SIGNUP")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}
