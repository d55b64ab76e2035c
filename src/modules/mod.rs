//! Feature modules, one per principal plus login and the dashboard.
//!
//! Each module follows the same shape:
//!
//! - `controller.rs`: HTTP handlers with their OpenAPI annotations
//! - `service.rs`: store access and business rules
//! - `router.rs`: route table, merged under `/api/auth`

use uuid::Uuid;

use scholaris_core::AppError;

pub mod auth;
pub mod dashboard;
pub mod directors;
pub mod hods;
pub mod students;
pub mod teachers;

/// Parses a path id. An id that cannot exist is reported like a missing one.
pub(crate) fn parse_path_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(not_found))
}

/// Maps a failed insert, turning a unique-email violation into a conflict.
pub(crate) fn insert_error(err: sqlx::Error, conflict: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::conflict(conflict);
        }
    }
    AppError::internal(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_path_id("abc", "HOD not found").unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
        assert_eq!(err.message(), "HOD not found");
    }

    #[test]
    fn test_parse_path_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_path_id(&id.to_string(), "x").unwrap(), id);
    }
}
