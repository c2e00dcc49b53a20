//! User directory service trait definition.

use crate::dto::{NewUserRequest, UserListing};
use async_trait::async_trait;
use roster_core::UserId;

/// User directory service.
///
/// The write operations deliberately return nothing: failures are logged
/// and the caller (an HTTP layer responding with a redirect) observes
/// success semantics either way. The read operation surfaces failure as an
/// empty listing with an error indicator. This asymmetry is contractual.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Lists all users, newest first, via the snapshot cache.
    async fn list_users(&self) -> UserListing;

    /// Creates a user, uploading the attached image first when present and
    /// allowed.
    async fn add_user(&self, request: NewUserRequest);

    /// Deletes a user and its attached image. Deleting a nonexistent id is
    /// a no-op.
    async fn remove_user(&self, id: UserId);
}
