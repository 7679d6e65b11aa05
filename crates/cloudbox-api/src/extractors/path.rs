//! Typed path parameter helpers.

use uuid::Uuid;

use cloudbox_core::error::AppError;

/// Parses an entry ID from a path segment.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::validation(format!("Invalid entry id: {s}")))
}
