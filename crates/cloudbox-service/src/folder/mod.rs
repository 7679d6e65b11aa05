//! Folder creation and the tree guards shared by entry mutations.

pub mod hierarchy;
pub mod service;

pub use hierarchy::Hierarchy;
pub use service::{CreateFolderRequest, FolderService};
