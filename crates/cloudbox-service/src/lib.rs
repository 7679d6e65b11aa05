//! # cloudbox-service
//!
//! Business logic for Cloudbox. Each service receives its collaborators at
//! construction time as `Arc` trait objects and scopes every operation to
//! the caller carried in a [`RequestContext`].

pub mod context;
pub mod entry;
pub mod folder;
pub mod upload;

pub use context::RequestContext;
pub use entry::{EntryService, ListEntriesRequest};
pub use folder::{CreateFolderRequest, FolderService, Hierarchy};
pub use upload::{AssetDescriptor, CredentialService, RegisterUploadRequest, UploadService};
