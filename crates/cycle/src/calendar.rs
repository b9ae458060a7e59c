//! Per-day flags and month grids for calendar renderers.

use bloom_core::{CoreError, CyclePrediction, Day, MoodLog, PeriodInterval};
use serde::Serialize;

/// Cells in a month grid: six Sunday-first weeks.
const GRID_CELLS: i64 = 6 * 7;

/// Cycle markers for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayFlags {
    /// Inside a logged period
    pub is_period_day: bool,
    /// Inside the projected fertile window (ovulation day included)
    pub is_fertile_day: bool,
    /// The projected ovulation day
    pub is_ovulation_day: bool,
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Day shown in the cell
    pub date: Day,
    /// Whether the day belongs to the displayed month
    pub is_current_month: bool,
    /// Whether the day is today
    pub is_today: bool,
    /// Cycle markers; always clear outside the displayed month
    pub flags: DayFlags,
    /// Emoji of the mood logged for the day
    pub mood: Option<String>,
}

/// Compute the cycle markers for `day`.
///
/// Logged periods hide projected markers: a period day is never also shown
/// as fertile or ovulation.
pub fn day_flags(
    intervals: &[PeriodInterval],
    prediction: Option<&CyclePrediction>,
    day: Day,
) -> DayFlags {
    if intervals.iter().any(|i| i.contains(day)) {
        return DayFlags {
            is_period_day: true,
            ..DayFlags::default()
        };
    }

    let Some(prediction) = prediction else {
        return DayFlags::default();
    };

    if prediction.ovulation_date == Some(day) {
        return DayFlags {
            is_period_day: false,
            is_fertile_day: true,
            is_ovulation_day: true,
        };
    }

    DayFlags {
        is_fertile_day: prediction
            .fertile_window
            .is_some_and(|w| w.contains(day)),
        ..DayFlags::default()
    }
}

/// Build the 42-cell grid for `month` of `year`.
///
/// Leading and trailing days from the neighbouring months are included but
/// carry no cycle markers. Moods are shown on every cell.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDateFormat`] when `month` is not 1..=12.
pub fn month_grid(
    year: i32,
    month: u32,
    today: Day,
    intervals: &[PeriodInterval],
    prediction: Option<&CyclePrediction>,
    moods: &[MoodLog],
) -> Result<Vec<CalendarCell>, CoreError> {
    let first = Day::from_ymd(year, month, 1)?;
    let grid_start = first.add_days(-i64::from(first.weekday_from_sunday()));

    let cells: Vec<CalendarCell> = (0..GRID_CELLS)
        .map(|offset| {
            let date = grid_start.add_days(offset);
            let is_current_month = date.year() == year && date.month() == month;
            CalendarCell {
                date,
                is_current_month,
                is_today: date.is_same_day(today),
                flags: if is_current_month {
                    day_flags(intervals, prediction, date)
                } else {
                    DayFlags::default()
                },
                mood: moods
                    .iter()
                    .find(|m| m.date == date)
                    .map(|m| m.mood.clone()),
            }
        })
        .collect();

    Ok(cells)
}
