use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use scholaris_auth::{Claims, verify_token};
use scholaris_core::{AppError, Role};

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the decoded claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The principal's id within its role store.
    pub fn principal_id(&self) -> Result<Uuid, AppError> {
        self.0
            .principal_id()
            .ok_or_else(|| AppError::invalid_token("Invalid principal id in token"))
    }

    /// `None` when the token carries a role tag this API does not know.
    pub fn role(&self) -> Option<Role> {
        self.0.parsed_role().ok()
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::unauthenticated("No token provided"))?
            .to_str()
            .map_err(|_| AppError::invalid_token("Invalid authorization header format"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header format"))?;

        let claims = verify_token(token.trim(), &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
