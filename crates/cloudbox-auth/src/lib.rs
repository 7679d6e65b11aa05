//! # cloudbox-auth
//!
//! Verification of identity provider session tokens.
//!
//! ## Modules
//!
//! - `jwt`: claims layout, the [`JwtIdentityVerifier`] used by the API, and
//!   a [`JwtEncoder`] for minting development tokens

pub mod jwt;

pub use jwt::{Claims, JwtEncoder, JwtIdentityVerifier};
