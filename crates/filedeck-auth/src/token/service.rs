//! Session token lifecycle over the key-value store.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use filedeck_cache::keys;
use filedeck_cache::provider::CacheManager;
use filedeck_core::config::auth::AuthConfig;
use filedeck_core::result::AppResult;
use filedeck_core::traits::cache::KeyValueStore;

use super::generator::{TokenGenerator, UuidTokenGenerator};

/// Issues, resolves, and revokes session tokens.
///
/// A token's life is `Unissued -> Active -> {Expired | Revoked}` and never
/// back: a new sign-in always mints a new token. Concurrent sign-ins for
/// one user produce independent, co-existing tokens. Every resolve is a
/// fresh store lookup, so revocation is visible immediately.
#[derive(Debug, Clone)]
pub struct SessionTokenService {
    store: Arc<CacheManager>,
    generator: Arc<dyn TokenGenerator>,
    ttl: Duration,
}

impl SessionTokenService {
    /// Create a token service with the default UUID generator.
    pub fn new(store: Arc<CacheManager>, config: &AuthConfig) -> Self {
        Self::with_generator(store, config, Arc::new(UuidTokenGenerator))
    }

    /// Create a token service with a custom generator.
    pub fn with_generator(
        store: Arc<CacheManager>,
        config: &AuthConfig,
        generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            store,
            generator,
            ttl: Duration::from_secs(config.token_ttl_seconds),
        }
    }

    /// Mint a fresh token for a user and persist it with the configured TTL.
    pub async fn issue(&self, user_id: Uuid) -> AppResult<String> {
        let token = self.generator.generate();
        self.store
            .set(&keys::auth_token(&token), &user_id.to_string(), self.ttl)
            .await?;
        debug!(user_id = %user_id, "Issued session token");
        Ok(token)
    }

    /// Resolve a token to the owning user id.
    ///
    /// `None` means the token was never issued, has expired, or was
    /// revoked; the three cases are indistinguishable by design.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<Uuid>> {
        let value = self.store.get(&keys::auth_token(token)).await?;
        Ok(value.and_then(|v| Uuid::parse_str(&v).ok()))
    }

    /// Revoke a token. Revoking an absent token is a no-op, never an error.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        self.store.delete(&keys::auth_token(token)).await?;
        debug!("Revoked session token");
        Ok(())
    }
}
