//! Claims carried by identity provider session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cloudbox_core::traits::Identity;

/// Registered claims Cloudbox reads from a session token.
///
/// Unknown claims are ignored, so tokens from the hosted identity provider
/// deserialize as long as these fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the stable user identifier that owns entries.
    pub sub: String,
    /// Provider session ID, if the provider issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// The caller identity these claims establish.
    pub fn into_identity(self) -> Identity {
        Identity {
            owner_id: self.sub,
            session_id: self.sid,
        }
    }
}
