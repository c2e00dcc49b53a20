//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for user IDs.
///
/// User IDs are assigned by the record store (`BIGSERIAL`), so unlike
/// randomly generated identifiers there is no `new()` constructor; values
/// come back from inserts or are parsed from request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Creates a user ID from a raw database value.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::from_i64(42);
        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_user_id_parsing() {
        let id: UserId = "17".parse().unwrap();
        assert_eq!(id, UserId::from_i64(17));
        assert!("not-a-number".parse::<UserId>().is_err());
    }

    #[test]
    fn test_user_id_serde_transparent() {
        let id = UserId::from_i64(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: UserId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
