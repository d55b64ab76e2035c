//! Token payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use scholaris_core::{ParseRoleError, Role};

/// Claims embedded in every issued token.
///
/// `role` is kept as the raw tag so that a token carrying an unknown role
/// still authenticates and is then refused by the role guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Principal id within its role's store
    pub id: String,
    /// Display name at the time of login
    pub name: String,
    /// Role tag, one of `Director`, `HOD`, `Teacher`, `Student`
    pub role: String,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
    /// Expiration timestamp (Unix seconds)
    pub exp: usize,
}

impl Claims {
    pub fn parsed_role(&self) -> Result<Role, ParseRoleError> {
        self.role.parse()
    }

    pub fn principal_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}
