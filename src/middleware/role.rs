//! Exact-role guards.
//!
//! A guard admits only the one role it names. Seniority grants nothing: a
//! Director token is refused by [`RequireHod`] just like a Student token.
//! Each guard is declared by the role it manages and admits a principal
//! only when [`Role::can_manage`] allows it.

use scholaris_core::{AppError, Role};

use crate::middleware::auth::AuthUser;

/// The role whose guard protects registration, listing, updates and
/// deletion of `target` records.
pub fn guard_role_for(target: Role) -> Option<Role> {
    target.superior()
}

/// Fails with `Forbidden` unless the claimed role may manage `target`
/// records. An unknown role tag is treated as a mismatch.
pub fn check_manages(auth_user: &AuthUser, target: Role) -> Result<(), AppError> {
    let Some(required) = guard_role_for(target) else {
        return Err(AppError::forbidden("Access denied"));
    };

    match auth_user.role() {
        Some(role) if role.can_manage(target) => Ok(()),
        _ => Err(AppError::forbidden(format!("Access denied. {} only", required))),
    }
}

/// Declares an extractor that authenticates the request and then requires
/// the one role allowed to manage `$target` records.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $target:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = scholaris_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                $crate::middleware::role::check_manages(&auth_user, $target)?;

                Ok($name(auth_user))
            }
        }
    };
}

require_role!(RequireDirector, Role::Hod);
require_role!(RequireHod, Role::Teacher);
require_role!(RequireTeacher, Role::Student);
