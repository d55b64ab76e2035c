//! # Scholaris Core
//!
//! Core types, errors, and utilities for the Scholaris API.
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`role`]: The Director → HOD → Teacher → Student hierarchy
//!
//! # Example
//!
//! ```ignore
//! use scholaris_core::{AppError, Role, hash_password, verify_password};
//!
//! let error = AppError::not_found("HOD not found");
//! let hash = hash_password("secure_password", 10)?;
//! assert!(Role::Director.can_manage(Role::Hod));
//! ```

pub mod errors;
pub mod password;
pub mod role;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{DEFAULT_HASH_COST, hash_password, verify_password};
pub use role::{ParseRoleError, Role};
