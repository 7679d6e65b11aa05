//! Upload credential issuance for the external asset host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::traits::identity::Identity;

/// Time-scoped parameters that let a client upload bytes directly to the
/// asset host without routing them through this server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUploadParameters {
    /// Single-use random token.
    pub token: String,
    /// Unix timestamp (seconds) after which the signature is rejected.
    pub expire: i64,
    /// Signature over `token` and `expire`.
    pub signature: String,
    /// Public key identifying the account at the asset host.
    pub public_key: String,
    /// Base URL of the asset host.
    pub url_endpoint: String,
}

/// Issues signed upload parameters on behalf of an authenticated caller.
#[async_trait]
pub trait UploadCredentialIssuer: Send + Sync + std::fmt::Debug + 'static {
    /// Produce fresh upload parameters for `identity`.
    async fn issue(&self, identity: &Identity) -> AppResult<SignedUploadParameters>;
}
