//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Roster.
///
/// This enum provides the error variants that cover domain, application,
/// and infrastructure failures. The HTTP surface that consumes this crate
/// maps variants to response codes via [`status_code`](RosterError::status_code).
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Object store error
    #[error("Object store error: {0}")]
    ObjectStore(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Timeout(_) => 503,
            Self::Database(_)
            | Self::Cache(_)
            | Self::ObjectStore(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::ObjectStore(_) => "OBJECT_STORE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Cache(_) | Self::ObjectStore(_) | Self::Timeout(_)
        )
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
