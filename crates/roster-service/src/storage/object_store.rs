//! Object store trait and public URL derivation.

use async_trait::async_trait;
use roster_config::ObjectStoreConfig;
use roster_core::RosterResult;

/// Bucket-scoped blob store for user images.
///
/// Objects are opaque bytes under generated unique names; the bucket is
/// fixed at construction time. Blobs are owned 1:1 by the user record that
/// references them.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads an object under the given name.
    async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> RosterResult<()>;

    /// Removes an object by name.
    async fn remove(&self, name: &str) -> RosterResult<()>;

    /// Checks whether the configured bucket exists.
    async fn bucket_exists(&self) -> RosterResult<bool>;

    /// Creates the configured bucket if missing and applies the
    /// public-read policy.
    async fn ensure_bucket(&self) -> RosterResult<()>;
}

/// Derives the public URL under which an uploaded object is reachable.
///
/// Derivation happens on every read; display URLs are never part of the
/// cached snapshot.
#[derive(Debug, Clone)]
pub struct PublicObjectUrl {
    base: String,
    bucket: String,
}

impl PublicObjectUrl {
    /// Builds the resolver from object-store configuration.
    #[must_use]
    pub fn from_config(config: &ObjectStoreConfig) -> Self {
        Self {
            base: config.public_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        }
    }

    /// Returns the public URL for an object name.
    #[must_use]
    pub fn for_object(&self, name: &str) -> String {
        format!("{}/{}/{}", self.base, self.bucket, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_object() {
        let resolver = PublicObjectUrl::from_config(&ObjectStoreConfig::default());
        assert_eq!(
            resolver.for_object("abc_photo.png"),
            "http://minio-api.dev.localhost:8080/user-images/abc_photo.png"
        );
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let mut config = ObjectStoreConfig::default();
        config.public_url = "http://cdn.example.com/".to_string();
        let resolver = PublicObjectUrl::from_config(&config);
        assert_eq!(
            resolver.for_object("pic.jpg"),
            "http://cdn.example.com/user-images/pic.jpg"
        );
    }
}
