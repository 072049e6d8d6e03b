//! # filedeck-auth
//!
//! Authentication for FileDeck: Basic credential verification, the
//! ephemeral session-token lifecycle over the key-value store, and
//! token-to-user identity resolution.
//!
//! A session token is an opaque random string standing in for a verified
//! identity for a bounded window. Tokens live only in the key-value store
//! (`auth_<token>` → user id, TTL-bounded) and are cheap to reissue; a
//! store restart dropping live sessions is an accepted trade-off.

pub mod credentials;
pub mod directory;
pub mod identity;
pub mod token;

pub use credentials::verifier::CredentialVerifier;
pub use directory::UserDirectory;
pub use identity::IdentityResolver;
pub use token::service::SessionTokenService;
