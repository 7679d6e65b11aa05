//! Signed upload parameters for direct client uploads.
//!
//! The asset host verifies `signature == hex(HMAC-SHA1(private_key, token + expire))`
//! and rejects reused tokens or expiries more than an hour ahead.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::debug;
use uuid::Uuid;

use cloudbox_core::config::AssetHostConfig;
use cloudbox_core::error::AppError;
use cloudbox_core::result::AppResult;
use cloudbox_core::traits::{Identity, SignedUploadParameters, UploadCredentialIssuer};

/// Longest lifetime the asset host accepts for upload parameters.
pub const MAX_CREDENTIAL_TTL_SECONDS: u64 = 3600;

type HmacSha1 = Hmac<Sha1>;

/// Lowercase hex HMAC-SHA1 of `payload` keyed with `private_key`.
pub fn sign_payload(private_key: &str, payload: &str) -> AppResult<String> {
    let mut mac = HmacSha1::new_from_slice(private_key.as_bytes())
        .map_err(|_| AppError::external_service("Asset host private key is unusable"))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Issues upload parameters signed with the asset host private key.
#[derive(Clone)]
pub struct HmacUploadSigner {
    public_key: String,
    private_key: String,
    url_endpoint: String,
    /// Seconds between issuance and `expire`.
    ttl_seconds: u64,
}

impl std::fmt::Debug for HmacUploadSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacUploadSigner")
            .field("public_key", &self.public_key)
            .field("url_endpoint", &self.url_endpoint)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl HmacUploadSigner {
    /// Creates a signer from asset host configuration.
    ///
    /// The TTL is clamped to `1..=MAX_CREDENTIAL_TTL_SECONDS`. A missing
    /// private key is reported when credentials are requested, not here, so
    /// the rest of the API stays available.
    pub fn new(config: &AssetHostConfig) -> Self {
        Self {
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
            url_endpoint: config.url_endpoint.clone(),
            ttl_seconds: config
                .credential_ttl_seconds
                .clamp(1, MAX_CREDENTIAL_TTL_SECONDS),
        }
    }

    /// Effective credential lifetime in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Sign a token/expiry pair.
    pub fn sign(&self, token: &str, expire: i64) -> AppResult<String> {
        if self.private_key.is_empty() {
            return Err(AppError::external_service(
                "Asset host private key is not configured",
            ));
        }
        sign_payload(&self.private_key, &format!("{token}{expire}"))
    }
}

#[async_trait]
impl UploadCredentialIssuer for HmacUploadSigner {
    async fn issue(&self, identity: &Identity) -> AppResult<SignedUploadParameters> {
        let token = Uuid::new_v4().to_string();
        let expire = Utc::now().timestamp() + self.ttl_seconds as i64;
        let signature = self.sign(&token, expire)?;

        debug!(owner_id = %identity.owner_id, expire, "Upload credentials issued");

        Ok(SignedUploadParameters {
            token,
            expire,
            signature,
            public_key: self.public_key.clone(),
            url_endpoint: self.url_endpoint.clone(),
        })
    }
}
