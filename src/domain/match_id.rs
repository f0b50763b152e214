//! Type-safe match identifier.
//!
//! [`MatchId`] is a newtype wrapper around [`uuid::Uuid`] (v4) providing
//! type safety so that match identifiers cannot be confused with other
//! strings or UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a recorded match.
///
/// Wraps a UUID v4. Generated once when the result is recorded and
/// immutable thereafter. Match records are never overwritten, so a fresh
/// id per call guarantees insert-only semantics in the match table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(uuid::Uuid);

impl MatchId {
    /// Creates a new random `MatchId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_ids() {
        let a = MatchId::new();
        let b = MatchId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_uuid_format() {
        let id = MatchId::new();
        let s = format!("{id}");
        assert_eq!(s.len(), 36); // UUID string length
        assert!(s.contains('-'));
    }

    #[test]
    fn serde_round_trip() {
        let id = MatchId::new();
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        let deserialized: MatchId = serde_json::from_str(&json).ok().unwrap_or_else(|| {
            panic!("deserialization failed");
        });
        assert_eq!(id, deserialized);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MatchId::new();
        let json = serde_json::to_string(&id).ok().unwrap_or_default();
        // Transparent serde: the table attribute is a bare uuid string.
        assert_eq!(json, format!("\"{id}\""));
    }
}
