//! User entity.

use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing one record in the directory.
///
/// Records are created and deleted, never updated in place. `image_url`
/// holds the generated object name of the attached image in the blob
/// bucket; `None` means the user has no image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Object name of the attached image, if any.
    pub image_url: Option<String>,

    /// Insertion timestamp, set by the store.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user record from its stored parts.
    #[must_use]
    pub fn new(
        id: UserId,
        name: String,
        email: String,
        image_url: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            image_url,
            created_at,
        }
    }

    /// Checks whether an image is attached to this record.
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}
