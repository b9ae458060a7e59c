//! Forward projection of the next cycle's events.

use bloom_core::{CycleConfig, CyclePrediction, FertileWindow, PeriodInterval, Projection};

use crate::estimator::{CycleEstimator, CycleStats};

/// Projects next period, ovulation and fertile window from [`CycleStats`].
#[derive(Debug, Clone, Default)]
pub struct CycleProjector {
    config: CycleConfig,
}

impl CycleProjector {
    /// Create a projector with the given offsets.
    pub fn new(config: CycleConfig) -> Self {
        Self { config }
    }

    /// Project forward from the last logged period start.
    ///
    /// Returns `None` when nothing has been logged, or when a projected day
    /// would fall outside the calendar.
    pub fn project(&self, stats: &CycleStats) -> Option<Projection> {
        let last_start = stats.last_period_start?;
        let next_period_start = last_start.checked_add_days(stats.average_cycle_length)?;
        let ovulation = next_period_start.checked_add_days(self.config.ovulation_offset)?;
        Some(Projection {
            next_period_start,
            ovulation,
            fertile_window: FertileWindow {
                start: ovulation.checked_add_days(self.config.fertile_window_start_offset)?,
                end: ovulation.checked_add_days(self.config.fertile_window_end_offset)?,
            },
        })
    }
}

/// Full prediction for an interval collection: statistics plus projection.
pub fn predict(intervals: &[PeriodInterval], config: &CycleConfig) -> CyclePrediction {
    let stats = CycleEstimator::new(config.clone()).estimate(intervals);
    let projection = CycleProjector::new(config.clone()).project(&stats);

    CyclePrediction {
        average_cycle_length: stats.average_cycle_length,
        average_period_length: stats.average_period_length,
        next_period_start_date: projection.map(|p| p.next_period_start),
        ovulation_date: projection.map(|p| p.ovulation),
        fertile_window: projection.map(|p| p.fertile_window),
        warning: stats.warning,
    }
}
