//! User-related DTOs.

use crate::storage::PublicObjectUrl;
use roster_core::{User, UserId};
use serde::{Deserialize, Serialize};

/// Image payload attached to a create request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename, sanitized before use.
    pub filename: String,
    /// MIME type reported by the client.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// Request to create a new user.
///
/// Name and email are required by convention but not enforced here,
/// matching the upstream form contract.
#[derive(Debug, Clone)]
pub struct NewUserRequest {
    pub name: String,
    pub email: String,
    pub image: Option<ImageUpload>,
}

/// Cache representation of one user.
///
/// `created_at` is materialized as an RFC 3339 string so the snapshot
/// round-trips through the cache as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: String,
}

impl From<User> for UserSnapshot {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image_url: user.image_url,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

impl From<&User> for UserSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            image_url: user.image_url.clone(),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// One user as presented to the listing surface.
///
/// `image_display_url` is derived from the object name on every read and is
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub image_display_url: Option<String>,
}

impl UserView {
    /// Builds the view for a snapshot, deriving the display URL.
    #[must_use]
    pub fn from_snapshot(snapshot: UserSnapshot, public_url: &PublicObjectUrl) -> Self {
        let image_display_url = snapshot
            .image_url
            .as_deref()
            .map(|name| public_url.for_object(name));

        Self {
            id: snapshot.id,
            name: snapshot.name,
            email: snapshot.email,
            image_url: snapshot.image_url,
            created_at: snapshot.created_at,
            image_display_url,
        }
    }
}

/// Result of the read path.
///
/// The read path cannot fail: on any error the user list is empty and
/// `error` carries the diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct UserListing {
    pub users: Vec<UserView>,
    /// Whether the list was served from the snapshot cache.
    pub from_cache: bool,
    /// Wall-clock duration of the whole read, in milliseconds.
    pub query_time_ms: f64,
    /// Diagnostic when the read degraded to an empty result.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use roster_config::ObjectStoreConfig;

    fn user_with_image() -> User {
        User::new(
            UserId::from_i64(1),
            "Ana".to_string(),
            "ana@x.com".to_string(),
            Some("abc_photo.png".to_string()),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_snapshot_materializes_timestamp() {
        let snapshot = UserSnapshot::from(user_with_image());
        assert_eq!(snapshot.created_at, "2024-05-01T12:00:00+00:00");
        assert_eq!(snapshot.image_url.as_deref(), Some("abc_photo.png"));
    }

    #[test]
    fn test_view_derives_display_url() {
        let public_url = PublicObjectUrl::from_config(&ObjectStoreConfig::default());
        let view = UserView::from_snapshot(UserSnapshot::from(user_with_image()), &public_url);
        assert_eq!(
            view.image_display_url.as_deref(),
            Some("http://minio-api.dev.localhost:8080/user-images/abc_photo.png")
        );
    }

    #[test]
    fn test_view_without_image_has_no_display_url() {
        let mut user = user_with_image();
        user.image_url = None;
        let public_url = PublicObjectUrl::from_config(&ObjectStoreConfig::default());
        let view = UserView::from_snapshot(UserSnapshot::from(user), &public_url);
        assert!(view.image_display_url.is_none());
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = UserSnapshot::from(user_with_image());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: UserSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
