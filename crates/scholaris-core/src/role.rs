//! The principal hierarchy and who may act on whom.
//!
//! ```text
//! Director
//!     ↓ registers / lists / updates / deletes
//! HOD
//!     ↓ registers / lists / updates / deletes
//! Teacher
//!     ↓ registers / lists / updates / deletes
//! Student
//! ```
//!
//! Management rights are never transitive: a Director cannot act on a
//! Teacher directly. Every guard in the API is declared by the role it
//! protects and checked through [`Role::can_manage`], so this table is the
//! single source of truth.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A principal's role. Variants are declared from least to most senior so
/// that the derived ordering follows the hierarchy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Role {
    Student,
    Teacher,
    #[serde(rename = "HOD")]
    Hod,
    Director,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Director, Role::Hod, Role::Teacher, Role::Student];

    /// The literal role tag stored on records and embedded in tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Director => "Director",
            Role::Hod => "HOD",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }

    /// The role directly above this one, the only role allowed to manage it.
    pub fn superior(&self) -> Option<Role> {
        match self {
            Role::Director => None,
            Role::Hod => Some(Role::Director),
            Role::Teacher => Some(Role::Hod),
            Role::Student => Some(Role::Teacher),
        }
    }

    /// Whether `self` may register, list, update or delete `target` records.
    pub fn can_manage(&self, target: Role) -> bool {
        target.superior() == Some(*self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Exact, case-sensitive match on the role tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Director" => Ok(Role::Director),
            "HOD" => Ok(Role::Hod),
            "Teacher" => Ok(Role::Teacher),
            "Student" => Ok(Role::Student),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
