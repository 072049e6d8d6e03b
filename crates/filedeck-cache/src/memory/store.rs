//! In-memory key-value store implementation using the moka crate.
//!
//! Used by the test suites and single-node development. TTL semantics
//! match the Redis backend: every entry carries its own expiry deadline,
//! and an expired entry is indistinguishable from one never set.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::future::Cache;

use filedeck_core::config::cache::MemoryCacheConfig;
use filedeck_core::result::AppResult;
use filedeck_core::traits::cache::KeyValueStore;

/// A stored value and the moment it stops existing.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory key-value store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    cache: Cache<String, Entry>,
}

impl MemoryStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        let cache = Cache::builder().max_capacity(config.max_capacity).build();
        Self { cache }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn is_alive(&self) -> bool {
        true
    }

    async fn wait_until_ready(&self, _timeout: Duration) -> bool {
        true
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self.cache.get(key).await {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value)),
            Some(_) => {
                // Lazy expiry: drop the entry on first read past the deadline.
                self.cache.invalidate(key).await;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.cache.invalidate(key).await;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn flush_all(&self) -> AppResult<()> {
        self.cache.invalidate_all();
        Ok(())
    }
}
