//! Identity provider token configuration.

use serde::{Deserialize, Serialize};

/// Signature algorithm used by the identity provider's session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenAlgorithm {
    /// HMAC-SHA256 with a shared secret.
    #[default]
    Hs256,
    /// RSA-SHA256 verified with the provider's PEM public key.
    Rs256,
}

/// Settings for verifying caller identity tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token signature algorithm.
    #[serde(default)]
    pub algorithm: TokenAlgorithm,
    /// Shared secret for HS256 tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// PEM-encoded RSA public key for RS256 tokens.
    #[serde(default)]
    pub public_key_pem: String,
    /// Expected `iss` claim. Not checked when absent.
    #[serde(default)]
    pub issuer: Option<String>,
    /// Clock skew tolerance in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Lifetime of development tokens minted by the CLI, in minutes.
    #[serde(default = "default_dev_token_ttl")]
    pub dev_token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            algorithm: TokenAlgorithm::default(),
            jwt_secret: default_jwt_secret(),
            public_key_pem: String::new(),
            issuer: None,
            leeway_seconds: default_leeway(),
            dev_token_ttl_minutes: default_dev_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_dev_token_ttl() -> u64 {
    60
}
