//! Cycle statistics estimation.

use bloom_core::{CycleConfig, Day, PeriodInterval};
use tracing::debug;

/// Averages derived from the logged history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStats {
    /// Rounded mean gap between consecutive period starts, or the default
    pub average_cycle_length: i64,

    /// Rounded mean inclusive period length, or the default
    pub average_period_length: i64,

    /// Number of logged intervals
    pub interval_count: usize,

    /// Number of start-to-start gaps that went into the cycle average
    pub cycle_count: usize,

    /// Start of the chronologically last interval
    pub last_period_start: Option<Day>,

    /// Advisory when the history is short
    pub warning: Option<String>,
}

/// Computes [`CycleStats`] from an unordered interval collection.
#[derive(Debug, Clone, Default)]
pub struct CycleEstimator {
    config: CycleConfig,
}

impl CycleEstimator {
    /// Create an estimator with the given constants.
    pub fn new(config: CycleConfig) -> Self {
        Self { config }
    }

    /// Constants in use.
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Estimate average cycle and period lengths.
    pub fn estimate(&self, intervals: &[PeriodInterval]) -> CycleStats {
        if intervals.is_empty() {
            return CycleStats {
                average_cycle_length: self.config.default_cycle_length,
                average_period_length: self.config.default_period_length,
                interval_count: 0,
                cycle_count: 0,
                last_period_start: None,
                warning: Some("Log your first period to get started!".to_string()),
            };
        }

        let sorted = sorted_by_start(intervals);

        let gaps: Vec<i64> = sorted
            .windows(2)
            .map(|w| w[0].start_date().days_until(w[1].start_date()))
            .collect();
        let average_cycle_length = rounded_mean(&gaps).unwrap_or(self.config.default_cycle_length);

        let lengths: Vec<i64> = sorted.iter().map(|i| i.length_days()).collect();
        let average_period_length =
            rounded_mean(&lengths).unwrap_or(self.config.default_period_length);

        let warning = if sorted.len() == 1 {
            Some(format!(
                "Predictions are based on a default {}-day cycle. Log more periods for personalized predictions.",
                self.config.default_cycle_length
            ))
        } else if gaps.len() < self.config.min_cycles_for_reliable_prediction {
            Some(format!(
                "Predictions are based on {} logged period(s). More data will improve accuracy.",
                sorted.len()
            ))
        } else {
            None
        };

        debug!(
            "Estimated cycle {}d, period {}d from {} periods",
            average_cycle_length,
            average_period_length,
            sorted.len()
        );

        CycleStats {
            average_cycle_length,
            average_period_length,
            interval_count: sorted.len(),
            cycle_count: gaps.len(),
            last_period_start: sorted.last().map(|i| i.start_date()),
            warning,
        }
    }
}

/// Intervals ordered by start date; equal starts keep their input order.
pub fn sorted_by_start(intervals: &[PeriodInterval]) -> Vec<&PeriodInterval> {
    let mut sorted: Vec<&PeriodInterval> = intervals.iter().collect();
    sorted.sort_by_key(|i| i.start_date());
    sorted
}

/// Mean rounded half away from zero; `None` for an empty slice.
fn rounded_mean(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let total: i64 = values.iter().sum();
    Some((total as f64 / values.len() as f64).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> PeriodInterval {
        PeriodInterval::parse(start, end).unwrap()
    }

    #[test]
    fn empty_history_uses_defaults() {
        let stats = CycleEstimator::default().estimate(&[]);
        assert_eq!(stats.average_cycle_length, 28);
        assert_eq!(stats.average_period_length, 5);
        assert_eq!(stats.last_period_start, None);
        assert_eq!(
            stats.warning.as_deref(),
            Some("Log your first period to get started!")
        );
    }

    #[test]
    fn single_interval_warns_about_default_cycle() {
        let stats = CycleEstimator::default().estimate(&[interval("2024-01-01", "2024-01-05")]);
        assert_eq!(stats.average_cycle_length, 28);
        assert_eq!(stats.average_period_length, 5);
        assert_eq!(stats.cycle_count, 0);
        let warning = stats.warning.unwrap();
        assert!(warning.contains("default 28-day cycle"), "{warning}");
    }

    #[test]
    fn two_intervals_average_one_gap() {
        let stats = CycleEstimator::default().estimate(&[
            interval("2024-01-01", "2024-01-05"),
            interval("2024-01-29", "2024-02-02"),
        ]);
        assert_eq!(stats.average_cycle_length, 28);
        assert_eq!(stats.average_period_length, 5);
        assert_eq!(stats.cycle_count, 1);
        assert!(stats.warning.unwrap().contains("2 logged period(s)"));
    }

    #[test]
    fn three_intervals_drop_the_warning() {
        let stats = CycleEstimator::default().estimate(&[
            interval("2024-01-01", "2024-01-05"),
            interval("2024-01-29", "2024-02-02"),
            interval("2024-02-28", "2024-03-03"),
        ]);
        // Gaps 28 and 30.
        assert_eq!(stats.average_cycle_length, 29);
        assert_eq!(stats.warning, None);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = interval("2024-01-01", "2024-01-04");
        let b = interval("2024-01-31", "2024-02-05");
        let c = interval("2024-03-01", "2024-03-05");
        let estimator = CycleEstimator::default();
        let forward = estimator.estimate(&[a.clone(), b.clone(), c.clone()]);
        let shuffled = estimator.estimate(&[c, a, b]);
        assert_eq!(forward, shuffled);
        assert_eq!(forward.last_period_start, Some(Day::parse("2024-03-01").unwrap()));
    }

    #[test]
    fn means_round_rather_than_truncate() {
        // Period lengths 4 and 5 -> 4.5 rounds to 5; gap 27.
        let stats = CycleEstimator::default().estimate(&[
            interval("2024-01-01", "2024-01-04"),
            interval("2024-01-28", "2024-02-01"),
        ]);
        assert_eq!(stats.average_period_length, 5);
        assert_eq!(stats.average_cycle_length, 27);

        // Gaps 27 and 28 -> 27.5 rounds to 28.
        let stats = CycleEstimator::default().estimate(&[
            interval("2024-01-01", "2024-01-03"),
            interval("2024-01-28", "2024-01-30"),
            interval("2024-02-25", "2024-02-27"),
        ]);
        assert_eq!(stats.average_cycle_length, 28);
    }

    #[test]
    fn long_outlier_skews_period_average() {
        // No outlier rejection: one 15-day log pulls the mean up.
        let stats = CycleEstimator::default().estimate(&[
            interval("2024-01-01", "2024-01-05"),
            interval("2024-01-29", "2024-02-12"),
        ]);
        assert_eq!(stats.average_period_length, 10);
    }

    #[test]
    fn config_changes_defaults() {
        let estimator = CycleEstimator::new(CycleConfig {
            default_cycle_length: 30,
            default_period_length: 4,
            ..Default::default()
        });
        let empty = estimator.estimate(&[]);
        assert_eq!(empty.average_cycle_length, 30);
        assert_eq!(empty.average_period_length, 4);

        let single = estimator.estimate(&[interval("2024-01-01", "2024-01-03")]);
        assert_eq!(single.average_cycle_length, 30);
        assert!(single.warning.unwrap().contains("default 30-day cycle"));
    }

    #[test]
    fn stable_sort_keeps_insertion_order_for_equal_starts() {
        let first = PeriodInterval::parse("2024-01-01", "2024-01-02").unwrap();
        let second = PeriodInterval::parse("2024-01-01", "2024-01-04").unwrap();
        let items = [first.clone(), second.clone()];
        let sorted = sorted_by_start(&items);
        assert_eq!(sorted[0].id(), first.id());
        assert_eq!(sorted[1].id(), second.id());
    }
}
