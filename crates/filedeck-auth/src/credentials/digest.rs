//! Deterministic password digest.
//!
//! Registration and verification must produce the identical digest for the
//! identical password, because credential matching is a stored-record
//! lookup on `{email, digest}`. SHA-256, hex-encoded.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded SHA-256 digest of a password.
pub fn password_digest(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}
