//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Entry store reachability.
    pub database: String,
    /// Seconds since startup.
    pub uptime_seconds: u64,
}
