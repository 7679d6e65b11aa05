//! Capability traits defined in `cloudbox-core` and implemented by other crates.
//!
//! Both external collaborators, the identity provider and the asset host,
//! are reached only through these traits.

pub mod identity;
pub mod upload;

pub use identity::{Identity, IdentityVerifier};
pub use upload::{SignedUploadParameters, UploadCredentialIssuer};
