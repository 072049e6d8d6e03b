//! Credential verifier — one-time email/password exchange.

use std::sync::Arc;

use tracing::debug;

use filedeck_core::result::AppResult;
use filedeck_entity::user::User;

use super::CredentialError;
use super::{basic, digest};
use crate::directory::UserDirectory;

/// Verifies a transport credential against the stored user records.
///
/// Standalone so the digest and parsing logic are testable without any
/// HTTP plumbing. Plaintext passwords are never compared and never leave
/// this module; only the digest is matched.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserDirectory>,
}

impl CredentialVerifier {
    /// Create a verifier over a user directory.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    /// Verify an optional authorization header value.
    ///
    /// Malformed and invalid credentials both come back as authentication
    /// errors; callers surface them identically so the response never
    /// reveals which part of the credential was wrong. Store failures
    /// propagate with their own kind and must not be conflated with bad
    /// credentials.
    pub async fn verify(&self, authorization: Option<&str>) -> AppResult<User> {
        let credentials = basic::parse(authorization)?;
        let password_digest = digest::password_digest(&credentials.password);

        let user = self
            .users
            .find_by_email_and_digest(&credentials.email, &password_digest)
            .await?;

        match user {
            Some(user) => {
                debug!(user_id = %user.id, "Credential verified");
                Ok(user)
            }
            None => Err(CredentialError::Invalid.into()),
        }
    }
}
