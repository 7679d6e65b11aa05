//! File and folder entries.

pub mod model;
pub mod path;

pub use model::{Entry, FOLDER_CONTENT_TYPE, NewEntry};
pub use path::{child_path, rebase_path, renamed_path, root_path, validate_name};
