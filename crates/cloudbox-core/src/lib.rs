//! # cloudbox-core
//!
//! Core crate for Cloudbox. Contains configuration schemas, the capability
//! traits for the external identity provider and asset host, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Cloudbox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
