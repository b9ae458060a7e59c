//! bloom core data models.
//!
//! This crate defines the records the cycle engine reads and produces:
//! calendar days, logged period intervals, mood logs, the derived
//! prediction and the per-day phase label.

#![warn(missing_docs)]

// Calendar days and identities
mod day;
mod id;

// Logged records
mod interval;
mod mood;

// Derived values
mod phase;
mod prediction;

mod config;
mod error;

// Re-exports
pub use day::{days_in_month, month_name, Day};
pub use id::IntervalId;

pub use interval::PeriodInterval;
pub use mood::{MoodLog, MoodOption, MOOD_OPTIONS};

pub use phase::{DataShortfall, Phase};
pub use prediction::{CyclePrediction, FertileWindow, Projection};

pub use config::{CycleConfig, MAX_LENGTH_DAYS};
pub use error::{CoreError, Result};
