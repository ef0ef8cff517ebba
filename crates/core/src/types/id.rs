//! Newtype ID for type-safe feedback references.

use serde::{Deserialize, Serialize};

/// Identifier of a stored feedback record.
///
/// Wraps the `i32` assigned by the store on insert. The wrapper prevents
/// feedback ids from being mixed up with other integers, and serializes
/// transparently as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i32);

impl FeedbackId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for FeedbackId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<FeedbackId> for i32 {
    fn from(id: FeedbackId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let id = FeedbackId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(FeedbackId::from(42), id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = FeedbackId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let parsed: FeedbackId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        assert_eq!(FeedbackId::new(3).to_string(), "3");
    }
}
