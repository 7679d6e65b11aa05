//! Logical path construction and entry name rules.
//!
//! Paths are informational strings derived from the tree; the parent link
//! is the source of truth for hierarchy.

use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;

/// Maximum length of a user-supplied entry name, in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Path of a root-level entry: `/dropbox/{owner_id}/{name}`.
pub fn root_path(owner_id: &str, name: &str) -> String {
    format!("/dropbox/{owner_id}/{name}")
}

/// Path of an entry placed directly under a folder at `parent_path`.
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{}/{}", parent_path.trim_end_matches('/'), name)
}

/// `path` with its last segment replaced by `name`.
pub fn renamed_path(path: &str, name: &str) -> String {
    match path.trim_end_matches('/').rfind('/') {
        Some(slash) => format!("{}/{}", &path[..slash], name),
        None => format!("/{name}"),
    }
}

/// Re-anchor `path` from `old_prefix` to `new_prefix`.
///
/// Returns `None` when `path` is neither `old_prefix` itself nor below it.
pub fn rebase_path(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if path == old_prefix {
        return Some(new_prefix.to_string());
    }
    path.strip_prefix(old_prefix)
        .filter(|rest| rest.starts_with('/'))
        .map(|rest| format!("{new_prefix}{rest}"))
}

/// Validate a user-supplied entry name and return it trimmed.
pub fn validate_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    if name.contains('/') {
        return Err(AppError::validation("Name cannot contain '/'"));
    }
    if name == "." || name == ".." {
        return Err(AppError::validation("Name cannot be '.' or '..'"));
    }
    Ok(name)
}
