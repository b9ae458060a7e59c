//! Period interval model - one logged period.

use serde::{Deserialize, Serialize};

use crate::day::Day;
use crate::error::{CoreError, Result};
use crate::id::IntervalId;

/// A logged period spanning `start_date..=end_date`.
///
/// Intervals are immutable once created. An edit is a delete followed by a
/// new interval with a fresh identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInterval {
    id: IntervalId,
    start_date: Day,
    end_date: Day,
}

impl PeriodInterval {
    /// Create a new interval with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] when `end` is before `start`.
    pub fn new(start: Day, end: Day) -> Result<Self> {
        Self::with_id(IntervalId::new(), start, end)
    }

    /// Create an interval with a known identifier, e.g. when re-validating a
    /// loaded record.
    pub fn with_id(id: IntervalId, start: Day, end: Day) -> Result<Self> {
        if end < start {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self {
            id,
            start_date: start,
            end_date: end,
        })
    }

    /// Parse both bounds from `YYYY-MM-DD` text and create the interval.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(Day::parse(start)?, Day::parse(end)?)
    }

    /// Identifier
    pub fn id(&self) -> IntervalId {
        self.id
    }

    /// First day of bleeding.
    pub fn start_date(&self) -> Day {
        self.start_date
    }

    /// Last day of bleeding (inclusive).
    pub fn end_date(&self) -> Day {
        self.end_date
    }

    /// Inclusive number of days covered.
    pub fn length_days(&self) -> i64 {
        self.start_date.days_until(self.end_date) + 1
    }

    /// Whether `day` falls inside the interval, bounds included.
    pub fn contains(&self, day: Day) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Whether two inclusive ranges share at least one day.
    pub fn overlaps(&self, other: &PeriodInterval) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Re-check the range invariant, for records that came from storage.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(CoreError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
