//! Configuration validation.
//!
//! Fails fast on invalid configuration at startup rather than at first use.

use crate::AppConfig;
use roster_core::{RosterError, RosterResult};

impl AppConfig {
    /// Validates the whole configuration, returning the first problem found.
    pub fn validate(&self) -> RosterResult<()> {
        if self.database.url.is_empty() {
            return Err(RosterError::configuration("database.url must not be empty"));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(RosterError::configuration(format!(
                "database.min_connections ({}) cannot exceed max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        if self.database.connect_timeout_secs == 0 {
            return Err(RosterError::configuration(
                "database.connect_timeout_secs must be positive",
            ));
        }

        if let Some(url) = &self.cache.url {
            if url.is_empty() {
                return Err(RosterError::configuration(
                    "cache.url must not be empty; omit it to disable the cache",
                ));
            }
            if self.cache.pool_size == 0 {
                return Err(RosterError::configuration("cache.pool_size must be positive"));
            }
        }

        if self.object_store.endpoint.is_empty() {
            return Err(RosterError::configuration(
                "object_store.endpoint must not be empty",
            ));
        }
        if self.object_store.bucket.is_empty() {
            return Err(RosterError::configuration(
                "object_store.bucket must not be empty",
            ));
        }
        if self.object_store.public_url.is_empty() {
            return Err(RosterError::configuration(
                "object_store.public_url must not be empty",
            ));
        }
        if self.object_store.operation_timeout_secs == 0 {
            return Err(RosterError::configuration(
                "object_store.operation_timeout_secs must be positive",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_disabled_cache_is_valid() {
        let mut config = AppConfig::default();
        config.cache.url = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pool_size_ordering_rejected() {
        let mut config = AppConfig::default();
        config.database.min_connections = 20;
        config.database.max_connections = 5;
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_empty_cache_url_rejected() {
        let mut config = AppConfig::default();
        config.cache.url = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let mut config = AppConfig::default();
        config.object_store.bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = AppConfig::default();
        config.object_store.operation_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
