//! Redis-based cache backend.

use super::CacheBackend;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use roster_config::CacheConfig;
use roster_core::{RosterError, RosterResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based cache backend.
///
/// Without a pool (the "cache unconfigured" deployment mode) every
/// operation is a silent no-op: gets report a miss, writes and deletes
/// succeed without doing anything.
pub struct RedisCache {
    /// Redis connection pool, absent when the cache is unconfigured.
    pool: Option<Arc<Pool>>,
}

impl RedisCache {
    /// Create a new Redis cache backend around an existing pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache backend (for when Redis is unconfigured).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Create a cache backend from configuration.
    ///
    /// A configuration without a URL yields the disabled backend.
    pub fn from_config(config: &CacheConfig) -> RosterResult<Self> {
        let Some(url) = &config.url else {
            debug!("Cache is not configured; running without it");
            return Ok(Self::disabled());
        };

        let mut cfg = deadpool_redis::Config::from_url(url);
        let mut pool_config = PoolConfig::new(config.pool_size as usize);
        pool_config.timeouts.wait = Some(config.wait_timeout());
        cfg.pool = Some(pool_config);

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| RosterError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> RosterResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                RosterError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(RosterError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> RosterResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> RosterResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> RosterResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| RosterError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn ping(&self) -> RosterResult<()> {
        let mut conn = self.get_conn().await?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| RosterError::Cache(format!("Ping failed: {}", e)))?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
