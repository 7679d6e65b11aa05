//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cloudbox_core::traits::Identity;
use cloudbox_entity::entry::Entry;

/// Context for the current authenticated request.
///
/// Built by the API layer after identity verification and passed into
/// every service method so each operation is scoped to one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Identity provider subject of the caller.
    pub owner_id: String,
    /// Identity provider session, when the token carries one.
    pub session_id: Option<String>,
    /// IP address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for a verified identity.
    pub fn new(identity: Identity, ip_address: String, user_agent: Option<String>) -> Self {
        Self {
            owner_id: identity.owner_id,
            session_id: identity.session_id,
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }

    /// Context with no transport details, for background callers and tests.
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self::new(Identity::new(owner_id), "unknown".to_string(), None)
    }

    /// The caller identity.
    pub fn identity(&self) -> Identity {
        Identity {
            owner_id: self.owner_id.clone(),
            session_id: self.session_id.clone(),
        }
    }

    /// Whether the caller owns `entry`.
    pub fn owns(&self, entry: &Entry) -> bool {
        entry.is_owned_by(&self.owner_id)
    }
}
