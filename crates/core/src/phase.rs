//! Phase model - the classification of a single day within the cycle.

use serde::{Deserialize, Serialize};

/// Which part of the cycle a given day belongs to.
///
/// Exactly one variant applies to any day. The text form (see
/// [`Phase::text`]) is what display and advisory collaborators receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The day is inside a logged period.
    Menstrual,
    /// Between the end of the last period and the fertile window.
    Follicular,
    /// Inside the projected fertile window, ovulation day excluded.
    Fertile,
    /// The projected ovulation day.
    OvulationDay,
    /// After the fertile window and before the next projected period.
    Luteal,
    /// Too little history to project anything.
    InsufficientData(DataShortfall),
    /// The projected next period has arrived but none was logged.
    NewCycleDue,
    /// No rule covers the day, e.g. a past day between two logged periods.
    Undetermined,
}

/// Why a phase could not be projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataShortfall {
    /// Nothing logged yet.
    NoIntervals,
    /// Exactly one period logged.
    SingleInterval,
    /// Periods are logged but no projection was supplied.
    AwaitingData,
}

impl Phase {
    /// Human-readable label.
    pub fn text(&self) -> &'static str {
        match self {
            Phase::Menstrual => "Menstrual Phase",
            Phase::Follicular => "Follicular Phase",
            Phase::Fertile => "Fertile Window",
            Phase::OvulationDay => "Ovulation Day",
            Phase::Luteal => "Luteal Phase",
            Phase::InsufficientData(DataShortfall::NoIntervals) => {
                "Log your period to get started with phase insights."
            }
            Phase::InsufficientData(DataShortfall::SingleInterval) => {
                "Log one more period for detailed phase insights."
            }
            Phase::InsufficientData(DataShortfall::AwaitingData) => {
                "Awaiting more data for detailed phase."
            }
            Phase::NewCycleDue => {
                "A new cycle may have begun. Log your period for updated insights."
            }
            Phase::Undetermined => "Cycle phase is being calculated...",
        }
    }

    /// Whether this is one of the five cycle phases proper.
    pub fn is_cycle_phase(&self) -> bool {
        matches!(
            self,
            Phase::Menstrual | Phase::Follicular | Phase::Fertile | Phase::OvulationDay | Phase::Luteal
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
