//! Cycle configuration - the defaults and fixed offsets used by the engine.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Longest cycle or period a configuration may name, in days.
pub const MAX_LENGTH_DAYS: i64 = 365;

/// Constants for estimation and projection.
///
/// Passed explicitly into the estimator, projector and classifier. Every
/// field has a default, so a partial JSON document only overrides what it
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Cycle length used until two periods are logged
    pub default_cycle_length: i64,

    /// Period length used when nothing is logged
    pub default_period_length: i64,

    /// Ovulation offset from the next period start, in days
    pub ovulation_offset: i64,

    /// Fertile window start offset from ovulation, in days
    pub fertile_window_start_offset: i64,

    /// Fertile window end offset from ovulation, in days
    pub fertile_window_end_offset: i64,

    /// Cycles (gaps between starts) needed before the limited-data warning
    /// is dropped
    pub min_cycles_for_reliable_prediction: usize,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: 28,
            default_period_length: 5,
            ovulation_offset: -14,
            fertile_window_start_offset: -5,
            fertile_window_end_offset: 1,
            min_cycles_for_reliable_prediction: 2,
        }
    }
}

impl CycleConfig {
    /// Check that the values describe a usable cycle.
    ///
    /// Lengths must lie in `1..=MAX_LENGTH_DAYS`, the period may not be
    /// longer than the cycle, and every offset must stay within one cycle.
    pub fn validate(&self) -> Result<()> {
        check_length("default_cycle_length", self.default_cycle_length)?;
        check_length("default_period_length", self.default_period_length)?;
        if self.default_period_length > self.default_cycle_length {
            return Err(CoreError::InvalidConfig(format!(
                "default_period_length ({}) is longer than default_cycle_length ({})",
                self.default_period_length, self.default_cycle_length
            )));
        }
        for (name, offset) in [
            ("ovulation_offset", self.ovulation_offset),
            ("fertile_window_start_offset", self.fertile_window_start_offset),
            ("fertile_window_end_offset", self.fertile_window_end_offset),
        ] {
            if offset.unsigned_abs() >= self.default_cycle_length.unsigned_abs() {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be shorter than the cycle ({} days), got {offset}",
                    self.default_cycle_length
                )));
            }
        }
        if self.fertile_window_start_offset > self.fertile_window_end_offset {
            return Err(CoreError::InvalidConfig(
                "fertile window start offset is after its end offset".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_length(name: &str, value: i64) -> Result<()> {
    if !(1..=MAX_LENGTH_DAYS).contains(&value) {
        return Err(CoreError::InvalidConfig(format!(
            "{name} must be between 1 and {MAX_LENGTH_DAYS} days, got {value}"
        )));
    }
    Ok(())
}
