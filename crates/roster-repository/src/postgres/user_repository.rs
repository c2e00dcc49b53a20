//! PostgreSQL user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use roster_core::{RosterResult, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: Arc<DatabasePool>,
}

impl PostgresUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_i64(row.id),
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        image_url: Option<&str>,
    ) -> RosterResult<User> {
        debug!("Inserting user: {}", name);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, image_url, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(image_url)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(User::from(row))
    }

    async fn list_desc(&self) -> RosterResult<Vec<User>> {
        debug!("Listing users newest first");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, image_url, created_at
            FROM users
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn image_url(&self, id: UserId) -> RosterResult<Option<String>> {
        debug!("Fetching image name for user: {}", id);

        let row: Option<Option<String>> =
            sqlx::query_scalar("SELECT image_url FROM users WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(row.flatten())
    }

    async fn delete(&self, id: UserId) -> RosterResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PostgresUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresUserRepository").finish_non_exhaustive()
    }
}
