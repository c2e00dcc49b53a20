//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "roster:cache";

/// Key holding the serialized full user list.
///
/// Collection granularity: writes invalidate this single key rather than
/// patching per-record entries.
#[must_use]
pub fn users_list() -> String {
    format!("{}:users:all", CACHE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_list_key() {
        assert_eq!(users_list(), "roster:cache:users:all");
    }
}
