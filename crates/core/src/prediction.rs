//! Cycle prediction model - derived statistics and projected dates.

use serde::{Deserialize, Serialize};

use crate::day::Day;

/// Statistics and projections derived from the logged intervals.
///
/// Recomputed from scratch whenever the interval collection changes; it has
/// no identity of its own and is never the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePrediction {
    /// Mean days between consecutive period starts
    pub average_cycle_length: i64,

    /// Mean inclusive days per logged period
    pub average_period_length: i64,

    /// Projected start of the next period
    pub next_period_start_date: Option<Day>,

    /// Projected ovulation day
    pub ovulation_date: Option<Day>,

    /// Projected fertile window
    pub fertile_window: Option<FertileWindow>,

    /// Advisory shown when the history is too short to trust
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl CyclePrediction {
    /// All projected dates, or `None` if any of them is missing.
    pub fn projection(&self) -> Option<Projection> {
        Some(Projection {
            next_period_start: self.next_period_start_date?,
            ovulation: self.ovulation_date?,
            fertile_window: self.fertile_window?,
        })
    }
}

/// Inclusive range of days with elevated conception likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertileWindow {
    /// First fertile day
    pub start: Day,
    /// Last fertile day
    pub end: Day,
}

impl FertileWindow {
    /// Whether `day` is inside the window, bounds included.
    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day <= self.end
    }
}

/// The projected dates of the upcoming cycle, all present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Projected start of the next period
    pub next_period_start: Day,
    /// Projected ovulation day
    pub ovulation: Day,
    /// Projected fertile window
    pub fertile_window: FertileWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> Day {
        Day::parse(s).unwrap()
    }

    #[test]
    fn projection_requires_every_date() {
        let mut prediction = CyclePrediction {
            average_cycle_length: 28,
            average_period_length: 5,
            next_period_start_date: Some(day("2024-01-29")),
            ovulation_date: Some(day("2024-01-15")),
            fertile_window: Some(FertileWindow {
                start: day("2024-01-10"),
                end: day("2024-01-16"),
            }),
            warning: None,
        };
        assert!(prediction.projection().is_some());

        prediction.ovulation_date = None;
        assert!(prediction.projection().is_none());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = FertileWindow {
            start: day("2024-01-10"),
            end: day("2024-01-16"),
        };
        assert!(window.contains(day("2024-01-10")));
        assert!(window.contains(day("2024-01-16")));
        assert!(!window.contains(day("2024-01-17")));
    }

    #[test]
    fn json_shape_matches_records() {
        let prediction = CyclePrediction {
            average_cycle_length: 28,
            average_period_length: 5,
            next_period_start_date: None,
            ovulation_date: None,
            fertile_window: None,
            warning: Some("Log your first period to get started!".into()),
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["averageCycleLength"], 28);
        assert!(json["nextPeriodStartDate"].is_null());
        assert_eq!(json["warning"], "Log your first period to get started!");
    }
}
