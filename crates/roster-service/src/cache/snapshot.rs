//! Snapshot cache for the full user list.
//!
//! The cache is a pure derived view of the record store: collection-level
//! granularity under one well-known key, discarded (never patched) on every
//! write. Its absence affects latency only, so none of these operations can
//! surface a failure to the caller; backend errors are logged and treated as
//! misses.

use super::{cache_keys, CacheBackend, CacheExt};
use crate::dto::UserSnapshot;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Expiry of the cached user-list snapshot (5 minutes).
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(300);

/// Infallible facade over a [`CacheBackend`] holding the user-list snapshot.
pub struct UserListCache {
    backend: Arc<dyn CacheBackend>,
}

impl UserListCache {
    /// Creates a snapshot cache over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Fetches the cached snapshot.
    ///
    /// Returns `(None, false)` on an unset key, an unreachable backend, or a
    /// payload that fails to deserialize; all three are the same miss.
    pub async fn get_snapshot(&self) -> (Option<Vec<UserSnapshot>>, bool) {
        match self.backend.get::<Vec<UserSnapshot>>(&cache_keys::users_list()).await {
            Ok(Some(users)) => {
                debug!("User snapshot served from cache ({} users)", users.len());
                (Some(users), true)
            }
            Ok(None) => (None, false),
            Err(err) => {
                debug!("Treating cache failure as a miss: {}", err);
                (None, false)
            }
        }
    }

    /// Stores the full user list under the snapshot key with [`SNAPSHOT_TTL`].
    ///
    /// Best-effort: a write failure must never fail the surrounding read.
    pub async fn put_snapshot(&self, users: &[UserSnapshot]) {
        if let Err(err) = self
            .backend
            .set(&cache_keys::users_list(), &users, SNAPSHOT_TTL)
            .await
        {
            warn!("Failed to write user snapshot to cache: {}", err);
        }
    }

    /// Discards the cached snapshot.
    ///
    /// Idempotent; a failure against a transiently unreachable backend is
    /// swallowed, leaving a staleness window bounded by [`SNAPSHOT_TTL`].
    pub async fn invalidate(&self) {
        if let Err(err) = self.backend.delete(&cache_keys::users_list()).await {
            warn!("Failed to invalidate user snapshot: {}", err);
        }
    }
}

impl std::fmt::Debug for UserListCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserListCache")
            .field("enabled", &self.backend.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::RedisCache;
    use async_trait::async_trait;
    use roster_core::{RosterError, RosterResult, UserId};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory cache backend for testing, with manual expiry control.
    struct InMemoryBackend {
        entries: Mutex<HashMap<String, String>>,
        last_ttl: Mutex<Option<Duration>>,
    }

    impl InMemoryBackend {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                last_ttl: Mutex::new(None),
            }
        }

        /// Simulates every stored entry reaching its TTL.
        fn expire_all(&self) {
            self.entries.lock().unwrap().clear();
        }

        fn last_ttl(&self) -> Option<Duration> {
            *self.last_ttl.lock().unwrap()
        }
    }

    #[async_trait]
    impl CacheBackend for InMemoryBackend {
        async fn get_raw(&self, key: &str) -> RosterResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> RosterResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            *self.last_ttl.lock().unwrap() = Some(ttl);
            Ok(())
        }

        async fn delete(&self, key: &str) -> RosterResult<bool> {
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn ping(&self) -> RosterResult<()> {
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    /// Backend whose every operation fails, as if Redis were unreachable.
    struct UnreachableBackend;

    #[async_trait]
    impl CacheBackend for UnreachableBackend {
        async fn get_raw(&self, _key: &str) -> RosterResult<Option<String>> {
            Err(RosterError::Cache("connection refused".to_string()))
        }

        async fn set_raw(&self, _key: &str, _value: &str, _ttl: Duration) -> RosterResult<()> {
            Err(RosterError::Cache("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> RosterResult<bool> {
            Err(RosterError::Cache("connection refused".to_string()))
        }

        async fn ping(&self) -> RosterResult<()> {
            Err(RosterError::Cache("connection refused".to_string()))
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    fn snapshot(id: i64, name: &str) -> UserSnapshot {
        UserSnapshot {
            id: UserId::from_i64(id),
            name: name.to_string(),
            email: format!("{}@example.com", name),
            image_url: None,
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_snapshot_roundtrip_reports_hit() {
        let backend = Arc::new(InMemoryBackend::new());
        let cache = UserListCache::new(backend.clone());

        let users = vec![snapshot(2, "bob"), snapshot(1, "ana")];
        cache.put_snapshot(&users).await;

        let (cached, hit) = cache.get_snapshot().await;
        assert!(hit);
        assert_eq!(cached.unwrap(), users);
        assert_eq!(backend.last_ttl(), Some(SNAPSHOT_TTL));
    }

    #[tokio::test]
    async fn test_empty_cache_is_a_miss() {
        let cache = UserListCache::new(Arc::new(InMemoryBackend::new()));
        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_expired_snapshot_is_a_miss() {
        let backend = Arc::new(InMemoryBackend::new());
        let cache = UserListCache::new(backend.clone());

        cache.put_snapshot(&[snapshot(1, "ana")]).await;
        backend.expire_all();

        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_a_miss() {
        let backend = Arc::new(InMemoryBackend::new());
        backend
            .set_raw(&cache_keys::users_list(), "{not json", SNAPSHOT_TTL)
            .await
            .unwrap();

        let cache = UserListCache::new(backend);
        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_invalidate_discards_snapshot() {
        let backend = Arc::new(InMemoryBackend::new());
        let cache = UserListCache::new(backend);

        cache.put_snapshot(&[snapshot(1, "ana")]).await;
        cache.invalidate().await;

        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_invalidate_without_key_is_a_noop() {
        let cache = UserListCache::new(Arc::new(InMemoryBackend::new()));
        cache.invalidate().await;
        cache.invalidate().await;

        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }

    #[tokio::test]
    async fn test_unreachable_backend_never_surfaces_errors() {
        let cache = UserListCache::new(Arc::new(UnreachableBackend));

        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);

        // Writes and invalidation swallow the failure.
        cache.put_snapshot(&[snapshot(1, "ana")]).await;
        cache.invalidate().await;
    }

    #[tokio::test]
    async fn test_disabled_backend_is_a_permanent_miss() {
        let cache = UserListCache::new(Arc::new(RedisCache::disabled()));

        cache.put_snapshot(&[snapshot(1, "ana")]).await;
        let (cached, hit) = cache.get_snapshot().await;
        assert!(cached.is_none());
        assert!(!hit);
    }
}
