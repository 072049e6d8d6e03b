//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sign-in response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The issued session token.
    pub token: String,
}

/// User summary for responses. Never carries the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Email address.
    pub email: String,
}

/// Backing store liveness, consumed by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Key-value store liveness.
    pub redis: bool,
    /// Database liveness.
    pub db: bool,
}

/// Collection counts, consumed by the stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Number of registered users.
    pub users: u64,
    /// Number of file records.
    pub files: u64,
}
