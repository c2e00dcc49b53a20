//! Caching infrastructure for the service layer.
//!
//! Two levels: a fallible [`CacheBackend`] abstraction with a Redis
//! implementation, and the infallible [`UserListCache`] facade that holds
//! the serialized user-list snapshot and swallows backend failures so the
//! cache can never fail a request.

mod cache_backend;
pub mod cache_keys;
mod redis_cache;
mod snapshot;

pub use cache_backend::{CacheBackend, CacheExt};
pub use redis_cache::RedisCache;
pub use snapshot::{UserListCache, SNAPSHOT_TTL};
