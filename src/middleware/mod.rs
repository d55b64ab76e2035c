//! Request extractors for authentication and role checks.
//!
//! - [`auth`]: [`auth::AuthUser`] decodes the bearer token (verifyToken)
//! - [`role`]: capability guards built on top of it
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. `AuthUser` verifies signature and expiry and exposes the claims
//! 3. A role guard such as `RequireHod` admits only the managing role
//! 4. The handler runs with the authenticated principal in hand
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireHod;
//!
//! async fn list_teachers(RequireHod(hod): RequireHod) -> Result<Json<Vec<Teacher>>, AppError> {
//!     // hod.0 is the decoded Claims
//! }
//! ```

pub mod auth;
pub mod role;
