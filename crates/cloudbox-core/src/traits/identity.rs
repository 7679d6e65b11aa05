//! Caller identity verification.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// The authenticated caller, as asserted by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque subject identifier; every entry is owned by one of these.
    pub owner_id: String,
    /// Identity provider session the token belongs to, if reported.
    pub session_id: Option<String>,
}

impl Identity {
    /// Create an identity without session information.
    pub fn new(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            session_id: None,
        }
    }
}

/// Verifies identity tokens issued by the external identity provider.
///
/// Implementations must return an `Unauthorized` error for any token they
/// cannot fully validate.
#[async_trait]
pub trait IdentityVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Validate `token` and return the caller it identifies.
    async fn verify(&self, token: &str) -> AppResult<Identity>;
}
