//! Direct-to-host upload flow: credential issuance and registration.

pub mod credentials;
pub mod service;

pub use credentials::CredentialService;
pub use service::{AssetDescriptor, RegisterUploadRequest, UploadService};
