//! External asset host configuration.

use serde::{Deserialize, Serialize};

/// Credentials and endpoint of the external media host that stores file bytes.
///
/// The private key never leaves the server; it signs the time-scoped upload
/// parameters handed to clients.
#[derive(Clone, Serialize, Deserialize)]
pub struct AssetHostConfig {
    /// Public API key, returned to clients alongside signed parameters.
    #[serde(default)]
    pub public_key: String,
    /// Private API key used as the HMAC signing key.
    #[serde(default)]
    pub private_key: String,
    /// Base URL under which uploaded assets are served.
    #[serde(default)]
    pub url_endpoint: String,
    /// Lifetime of issued upload credentials in seconds (capped at 3600).
    #[serde(default = "default_credential_ttl")]
    pub credential_ttl_seconds: u64,
}

impl Default for AssetHostConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: String::new(),
            url_endpoint: String::new(),
            credential_ttl_seconds: default_credential_ttl(),
        }
    }
}

impl std::fmt::Debug for AssetHostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetHostConfig")
            .field("public_key", &self.public_key)
            .field("private_key", &"****")
            .field("url_endpoint", &self.url_endpoint)
            .field("credential_ttl_seconds", &self.credential_ttl_seconds)
            .finish()
    }
}

fn default_credential_ttl() -> u64 {
    1800
}
