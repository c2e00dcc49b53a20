//! Cache backend trait for abstracted key-value operations.

use async_trait::async_trait;
use roster_core::RosterResult;
use std::time::Duration;

/// Key-value cache backend.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> RosterResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> RosterResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> RosterResult<bool>;

    /// Check connectivity to the backend.
    async fn ping(&self) -> RosterResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheBackend {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> RosterResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> RosterResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheBackend implementations
impl<T: CacheBackend + ?Sized> CacheExt for T {}
