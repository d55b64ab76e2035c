//! Token issuance and verification.
//!
//! Tokens are HS256-signed with [`JwtConfig::secret`] and expire after
//! [`JwtConfig::token_expiry`] seconds (one day by default).

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use scholaris_config::JwtConfig;
use scholaris_core::{AppError, Role};

use crate::claims::Claims;

/// Issues a token for a principal that has just proven its password.
pub fn create_token(
    id: Uuid,
    name: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        id: id.to_string(),
        name: name.to_string(),
        role: role.as_str().to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Checks signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an invalid-token error if the token is malformed, signed with a
/// different secret, or expired.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            token_expiry: 86_400,
        }
    }

    #[test]
    fn test_round_trip_keeps_identity() {
        let config = get_test_jwt_config();
        let id = Uuid::new_v4();

        let token = create_token(id, "Asha", Role::Hod, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.id, id.to_string());
        assert_eq!(claims.name, "Asha");
        assert_eq!(claims.role, "HOD");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        assert!(verify_token("invalid-token", &config).is_err());
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_token(Uuid::new_v4(), "Asha", Role::Director, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            token_expiry: 86_400,
        };

        assert!(verify_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            id: Uuid::new_v4().to_string(),
            name: "Old".to_string(),
            role: "Teacher".to_string(),
            iat: now - 2 * 86_400,
            exp: now - 86_400,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, &config).unwrap_err();
        assert_eq!(err.status.as_u16(), 401);
    }
}
