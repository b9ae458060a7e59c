//! Cycle engine
//!
//! Turns a history of logged periods into cycle statistics, projected
//! events and a per-day phase label:
//!
//! ```text
//! intervals → estimator → projector → classifier → phase / calendar flags
//! ```
//!
//! Every function here is pure over its inputs except [`CycleTracker`],
//! which ties the engine to a [`bloom_storage::Storage`] backend and
//! recomputes after each mutation.

#![warn(missing_docs)]

pub mod estimator;
pub mod projector;
pub mod classifier;
pub mod calendar;
pub mod log;
pub mod tracker;
mod error;

pub use estimator::{sorted_by_start, CycleEstimator, CycleStats};
pub use projector::{predict, CycleProjector};
pub use classifier::{classify, classify_traced, Rule, RULE_ORDER};
pub use calendar::{day_flags, month_grid, CalendarCell, DayFlags};
pub use log::{IntervalLog, MoodJournal};
pub use tracker::CycleTracker;
pub use error::{Result, TrackerError};
