//! Error types for the bloom-core crate.

use crate::day::Day;
use crate::id::IntervalId;

/// Result alias used across the core data model.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or validating cycle records.
///
/// Sparse or empty histories are never errors; they surface as a prediction
/// warning and as [`crate::Phase::InsufficientData`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A date string is not a valid `YYYY-MM-DD` calendar day.
    #[error("invalid date format: {input:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// An interval ends before it starts.
    #[error("invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        /// Requested start day.
        start: Day,
        /// Requested end day.
        end: Day,
    },

    /// A new interval intersects an interval that is already logged.
    #[error("period {start}..{end} overlaps logged period {existing} ({existing_start}..{existing_end})")]
    OverlappingInterval {
        /// Start of the rejected interval.
        start: Day,
        /// End of the rejected interval.
        end: Day,
        /// Identifier of the interval it collides with.
        existing: IntervalId,
        /// Start of the colliding interval.
        existing_start: Day,
        /// End of the colliding interval.
        existing_end: Day,
    },

    /// No interval with this identifier is logged.
    #[error("period not found: {0}")]
    IntervalNotFound(IntervalId),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
