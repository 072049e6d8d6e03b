//! Token generation capability.

use uuid::Uuid;

/// Source of fresh, unguessable session token strings.
///
/// Tokens must come from a cryptographically strong random source, are
/// never reused, and are never derived from user data.
pub trait TokenGenerator: Send + Sync + std::fmt::Debug + 'static {
    /// Generate a fresh token string.
    fn generate(&self) -> String;
}

/// Default generator: random v4 UUIDs (122 bits from the OS CSPRNG).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
