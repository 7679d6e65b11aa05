//! # cloudbox-assets
//!
//! Integration with the external asset host. File bytes never pass through
//! Cloudbox: clients upload directly to the host using short-lived signed
//! parameters issued here.

pub mod signer;

pub use signer::{HmacUploadSigner, MAX_CREDENTIAL_TTL_SECONDS, sign_payload};
