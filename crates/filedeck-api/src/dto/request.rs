//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Registration request body.
///
/// Both fields are optional at the serde level so a missing field maps to
/// the surface's own 400 message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address.
    pub email: Option<String>,
    /// Plaintext password; digested before it is stored.
    pub password: Option<String>,
}
