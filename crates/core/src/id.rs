//! Unique identifiers for bloom records.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a logged period interval.
///
/// Assigned once at creation and never changed; editing an interval means
/// deleting it and logging a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntervalId(Ulid);

impl IntervalId {
    /// Generate a new IntervalId
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for IntervalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for IntervalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for IntervalId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
