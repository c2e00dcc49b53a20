//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{RosterResult, User, UserId};

/// User repository trait.
///
/// Records have no update operation: the directory only inserts, lists,
/// and deletes.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new record and returns it with its store-assigned id and
    /// timestamp.
    async fn insert(
        &self,
        name: &str,
        email: &str,
        image_url: Option<&str>,
    ) -> RosterResult<User>;

    /// Lists all records, newest first.
    async fn list_desc(&self) -> RosterResult<Vec<User>>;

    /// Returns the image object name for a record, if the record exists and
    /// has one.
    async fn image_url(&self, id: UserId) -> RosterResult<Option<String>>;

    /// Deletes a record. Returns `false` when no such record existed.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
