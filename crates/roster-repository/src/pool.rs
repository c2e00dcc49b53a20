//! Database connection pool management.

use roster_config::DatabaseConfig;
use roster_core::{RosterError, RosterResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

/// Database pool wrapper.
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// The acquire timeout is bounded so a dead database cannot hang a
    /// request indefinitely.
    pub async fn connect(config: &DatabaseConfig) -> RosterResult<Self> {
        info!("Connecting to PostgreSQL database...");

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                RosterError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Creates a `DatabasePool` around a pre-existing pool.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> RosterResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Runs database migrations.
    pub async fn run_migrations(&self) -> RosterResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RosterError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = PgPool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
