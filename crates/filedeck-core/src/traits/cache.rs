//! Key-value store trait for pluggable session-token backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for key-value store backends (Redis or in-memory).
///
/// Values are plain strings. Liveness is a pure read of the backend's
/// connection state and never performs I/O; callers that need a real
/// round trip use [`KeyValueStore::health_check`].
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Whether the backing connection is currently usable.
    ///
    /// Reports `false` while the connection is still being established,
    /// after a failed handshake, and while connectivity is degraded. Never
    /// errors.
    fn is_alive(&self) -> bool;

    /// Wait until the connection state settles, up to `timeout`.
    ///
    /// Returns `true` if the store is ready, `false` on handshake failure
    /// or timeout. Intended for startup-time health gating.
    async fn wait_until_ready(&self, timeout: Duration) -> bool;

    /// Get a value by key.
    ///
    /// `None` covers both a key that was never set and one that expired;
    /// the two cases are indistinguishable.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value with a TTL, overwriting any existing value.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Deleting a non-existent key is a no-op, never an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether a key currently exists.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Round-trip probe of the backing service.
    async fn health_check(&self) -> AppResult<bool>;

    /// Remove every entry. Test and maintenance tooling only.
    async fn flush_all(&self) -> AppResult<()>;
}
