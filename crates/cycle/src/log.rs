//! Validated record collections.
//!
//! [`IntervalLog`] is the only way intervals enter the engine, so the range
//! and no-overlap invariants hold before the estimator ever runs.

use bloom_core::{CoreError, Day, IntervalId, MoodLog, PeriodInterval};

/// Logged periods, sorted by start date, pairwise non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalLog {
    intervals: Vec<PeriodInterval>,
}

impl IntervalLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a loaded snapshot, inserting each interval in turn.
    pub fn from_intervals(intervals: Vec<PeriodInterval>) -> Result<Self, CoreError> {
        let mut log = Self::new();
        for interval in intervals {
            interval.validate()?;
            log.add(interval)?;
        }
        Ok(log)
    }

    /// Add an interval.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::OverlappingInterval`] if any logged interval
    /// shares a day with it.
    pub fn add(&mut self, interval: PeriodInterval) -> Result<(), CoreError> {
        if let Some(existing) = self.intervals.iter().find(|i| i.overlaps(&interval)) {
            return Err(CoreError::OverlappingInterval {
                start: interval.start_date(),
                end: interval.end_date(),
                existing: existing.id(),
                existing_start: existing.start_date(),
                existing_end: existing.end_date(),
            });
        }
        // Insert after any equal start to keep insertion order on ties.
        let at = self
            .intervals
            .partition_point(|i| i.start_date() <= interval.start_date());
        self.intervals.insert(at, interval);
        Ok(())
    }

    /// Remove an interval by identifier.
    pub fn remove(&mut self, id: IntervalId) -> Result<PeriodInterval, CoreError> {
        let index = self
            .intervals
            .iter()
            .position(|i| i.id() == id)
            .ok_or(CoreError::IntervalNotFound(id))?;
        Ok(self.intervals.remove(index))
    }

    /// Intervals in start-date order.
    pub fn as_slice(&self) -> &[PeriodInterval] {
        &self.intervals
    }

    /// Number of logged intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing is logged.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Mood logs keyed by day, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodJournal {
    moods: Vec<MoodLog>,
}

impl MoodJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded logs; a later log for the same day wins.
    pub fn from_moods(moods: Vec<MoodLog>) -> Self {
        let mut journal = Self::new();
        for mood in moods {
            journal.set(mood);
        }
        journal
    }

    /// Insert or replace the log for `mood.date`, returning the replaced log.
    pub fn set(&mut self, mood: MoodLog) -> Option<MoodLog> {
        match self.moods.binary_search_by_key(&mood.date, |m| m.date) {
            Ok(index) => Some(std::mem::replace(&mut self.moods[index], mood)),
            Err(index) => {
                self.moods.insert(index, mood);
                None
            }
        }
    }

    /// Remove the log for `day`.
    pub fn remove(&mut self, day: Day) -> Option<MoodLog> {
        let index = self.moods.binary_search_by_key(&day, |m| m.date).ok()?;
        Some(self.moods.remove(index))
    }

    /// The log for `day`, if any.
    pub fn get(&self, day: Day) -> Option<&MoodLog> {
        self.moods
            .binary_search_by_key(&day, |m| m.date)
            .ok()
            .map(|index| &self.moods[index])
    }

    /// Logs in date order.
    pub fn as_slice(&self) -> &[MoodLog] {
        &self.moods
    }
}
