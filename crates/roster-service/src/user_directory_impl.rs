//! User directory service implementation.

use crate::cache::UserListCache;
use crate::dto::{NewUserRequest, UserListing, UserSnapshot, UserView};
use crate::storage::upload::{has_allowed_extension, unique_object_name};
use crate::storage::{ObjectStore, PublicObjectUrl};
use crate::user_directory::UserDirectory;
use async_trait::async_trait;
use roster_core::{RosterResult, UserId};
use roster_repository::UserRepository;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Orchestrates the record store, snapshot cache, and image object store.
pub struct UserDirectoryImpl {
    repository: Arc<dyn UserRepository>,
    cache: UserListCache,
    objects: Arc<dyn ObjectStore>,
    public_url: PublicObjectUrl,
}

impl UserDirectoryImpl {
    /// Creates a new user directory service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn UserRepository>,
        cache: UserListCache,
        objects: Arc<dyn ObjectStore>,
        public_url: PublicObjectUrl,
    ) -> Self {
        Self {
            repository,
            cache,
            objects,
            public_url,
        }
    }

    /// Cache-aside load of the user list.
    ///
    /// Returns the snapshots plus whether they came from the cache. A miss
    /// falls through to the record store and repopulates the cache
    /// best-effort.
    async fn load_users(&self) -> RosterResult<(Vec<UserSnapshot>, bool)> {
        let (cached, hit) = self.cache.get_snapshot().await;
        if let Some(users) = cached {
            return Ok((users, hit));
        }

        let users = self.repository.list_desc().await?;
        let snapshots: Vec<UserSnapshot> = users.iter().map(UserSnapshot::from).collect();

        self.cache.put_snapshot(&snapshots).await;

        Ok((snapshots, false))
    }

    async fn try_add_user(&self, request: NewUserRequest) -> RosterResult<()> {
        let image_url = match request.image {
            Some(image) if has_allowed_extension(&image.filename) => {
                let object_name = unique_object_name(&image.filename);
                // Upload before insert: a record pointing at a missing blob
                // must never exist. The reverse (orphan blob after a failed
                // insert) is tolerated and not compensated.
                self.objects
                    .put(&object_name, image.data, &image.content_type)
                    .await?;
                info!("Uploaded image '{}'", object_name);
                Some(object_name)
            }
            Some(image) => {
                debug!(
                    "Ignoring image '{}': extension not allowed",
                    image.filename
                );
                None
            }
            None => None,
        };

        let user = self
            .repository
            .insert(&request.name, &request.email, image_url.as_deref())
            .await?;
        info!("User created: {}", user.id);

        self.cache.invalidate().await;
        Ok(())
    }

    async fn try_remove_user(&self, id: UserId) -> RosterResult<()> {
        if let Some(object_name) = self.repository.image_url(id).await? {
            // A storage hiccup must not wedge the delete.
            if let Err(err) = self.objects.remove(&object_name).await {
                warn!(
                    "Failed to remove image '{}' for user {}: {}",
                    object_name, id, err
                );
            }
        }

        if self.repository.delete(id).await? {
            info!("User deleted: {}", id);
        } else {
            debug!("User {} did not exist, nothing to delete", id);
        }

        self.cache.invalidate().await;
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryImpl {
    async fn list_users(&self) -> UserListing {
        let started = Instant::now();
        let outcome = self.load_users().await;
        let query_time_ms =
            (started.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0;

        match outcome {
            Ok((snapshots, from_cache)) => {
                let users = snapshots
                    .into_iter()
                    .map(|snapshot| UserView::from_snapshot(snapshot, &self.public_url))
                    .collect();
                UserListing {
                    users,
                    from_cache,
                    query_time_ms,
                    error: None,
                }
            }
            Err(err) => {
                error!("Failed to list users: {}", err);
                UserListing {
                    users: Vec::new(),
                    from_cache: false,
                    query_time_ms,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    async fn add_user(&self, request: NewUserRequest) {
        debug!("Adding user: name={}, email={}", request.name, request.email);

        if let Err(err) = self.try_add_user(request).await {
            error!("Failed to add user: {}", err);
        }
    }

    async fn remove_user(&self, id: UserId) {
        debug!("Removing user: {}", id);

        if let Err(err) = self.try_remove_user(id).await {
            error!("Failed to remove user {}: {}", id, err);
        }
    }
}

impl std::fmt::Debug for UserDirectoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDirectoryImpl").finish_non_exhaustive()
    }
}
