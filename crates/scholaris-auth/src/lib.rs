//! # Scholaris Auth
//!
//! Token claims and signing for the Scholaris API.
//!
//! - [`claims`]: the `{id, name, role, iat, exp}` payload
//! - [`jwt`]: token issuance and verification
//!
//! # Example
//!
//! ```ignore
//! use scholaris_auth::{create_token, verify_token};
//! use scholaris_config::JwtConfig;
//! use scholaris_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(hod_id, "Asha", Role::Hod, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, "HOD");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_token, verify_token};
