//! HS256 session token minting for local development and tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use cloudbox_core::config::AuthConfig;
use cloudbox_core::error::{AppError, ErrorKind};
use cloudbox_core::result::AppResult;

use super::claims::Claims;

/// Signs session tokens with the shared HS256 secret.
///
/// Production tokens come from the identity provider; this encoder only
/// exists so a server running with `algorithm = "hs256"` can be exercised.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    /// Lifetime of issued tokens.
    ttl: Duration,
    /// Issuer stamped into issued tokens.
    issuer: Option<String>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates an encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::minutes(config.dev_token_ttl_minutes as i64),
            issuer: config.issuer.clone().filter(|i| !i.is_empty()),
        }
    }

    /// Issues a token for `owner_id` valid for the configured lifetime.
    pub fn issue(&self, owner_id: &str, session_id: Option<&str>) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: owner_id.to_string(),
            sid: session_id.map(str::to_string),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            iss: self.issuer.clone(),
        };
        self.encode(&claims)
    }

    /// Signs arbitrary claims.
    pub fn encode(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign token", e))
    }
}
