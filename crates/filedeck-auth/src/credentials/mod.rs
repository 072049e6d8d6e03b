//! Transport credential handling: Basic header parsing, the password
//! digest, and the verifier that ties them to the user directory.

pub mod basic;
pub mod digest;
pub mod verifier;

use thiserror::Error;

/// Credential failure taxonomy, local to the verifier.
///
/// Both variants surface to callers as the same generic Unauthorized
/// outcome; the split exists for logs and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// Header absent, unparseable, or missing one of email/password.
    #[error("malformed credential")]
    Malformed,
    /// Well-formed credential with no matching user record.
    #[error("invalid credential")]
    Invalid,
}

impl From<CredentialError> for filedeck_core::error::AppError {
    fn from(err: CredentialError) -> Self {
        filedeck_core::error::AppError::authentication(err.to_string())
    }
}
