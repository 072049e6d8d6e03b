//! Redis key-value store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use filedeck_core::error::{AppError, ErrorKind};
use filedeck_core::result::AppResult;
use filedeck_core::traits::cache::KeyValueStore;

use super::client::RedisClient;

/// Redis-backed key-value store.
///
/// Every call is a round trip; nothing is cached in-process, so a revoked
/// entry is invisible on the very next read.
#[derive(Debug, Clone)]
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a new Redis store over an existing client.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a command result into the application error space, updating the
    /// liveness state machine as a side effect.
    fn finish<T>(&self, result: redis::RedisResult<T>) -> AppResult<T> {
        match result {
            Ok(value) => {
                self.client.mark_recovered();
                Ok(value)
            }
            Err(e) if e.is_connection_dropped() || e.is_io_error() => {
                self.client.mark_degraded();
                Err(AppError::with_source(
                    ErrorKind::ServiceUnavailable,
                    "Redis connection lost",
                    e,
                ))
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Cache,
                format!("Redis command failed: {e}"),
                e,
            )),
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    fn is_alive(&self) -> bool {
        self.client.is_alive()
    }

    async fn wait_until_ready(&self, timeout: Duration) -> bool {
        self.client.wait_until_ready(timeout).await
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.client.connection()?;
        self.finish(conn.get(key).await)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let mut conn = self.client.connection()?;
        self.finish(conn.set_ex(key, value, ttl.as_secs()).await)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.client.connection()?;
        // DEL on a missing key returns 0, which is still success.
        self.finish(conn.del(key).await)
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.client.connection()?;
        self.finish(conn.exists(key).await)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut conn = self.client.connection()?;
        let pong: String = self.finish(redis::cmd("PING").query_async(&mut conn).await)?;
        Ok(pong == "PONG")
    }

    async fn flush_all(&self) -> AppResult<()> {
        let mut conn = self.client.connection()?;
        self.finish(redis::cmd("FLUSHDB").query_async(&mut conn).await)
    }
}
