//! Phase classification of a single day.
//!
//! Classification walks [`RULE_ORDER`] top to bottom and returns the first
//! rule that matches. The order is the contract: logged periods beat any
//! projection, and ovulation day is checked before the fertile window that
//! contains it.

use bloom_core::{CyclePrediction, DataShortfall, Day, PeriodInterval, Phase, Projection};

use crate::estimator::sorted_by_start;

/// One classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Day is inside any logged interval.
    Menstrual,
    /// No complete projection is available.
    RequireProjection,
    /// Day is the projected ovulation day.
    OvulationDay,
    /// Day is inside the projected fertile window.
    FertileWindow,
    /// Day is after the fertile window and before the next period.
    Luteal,
    /// Day is after the last period ended and before the fertile window.
    Follicular,
    /// Day is on or after the projected next period start.
    NewCycleDue,
    /// Nothing else matched.
    Fallback,
}

/// Rules in evaluation order.
pub const RULE_ORDER: [Rule; 8] = [
    Rule::Menstrual,
    Rule::RequireProjection,
    Rule::OvulationDay,
    Rule::FertileWindow,
    Rule::Luteal,
    Rule::Follicular,
    Rule::NewCycleDue,
    Rule::Fallback,
];

/// Everything a rule may look at, computed once per classification.
struct Context<'a> {
    day: Day,
    sorted: Vec<&'a PeriodInterval>,
    prediction: Option<&'a CyclePrediction>,
    projection: Option<Projection>,
}

impl Context<'_> {
    /// End of the most recent period: the last logged end, or an estimate
    /// stepped back one cycle from the projected next start.
    fn last_period_end(&self, projection: &Projection) -> Option<Day> {
        if let Some(last) = self.sorted.last() {
            return Some(last.end_date());
        }
        let prediction = self.prediction?;
        if prediction.average_cycle_length <= 0 || prediction.average_period_length <= 0 {
            return None;
        }
        projection
            .next_period_start
            .checked_add_days(-prediction.average_cycle_length)?
            .checked_add_days(prediction.average_period_length - 1)
    }
}

impl Rule {
    fn evaluate(self, ctx: &Context<'_>) -> Option<Phase> {
        let day = ctx.day;
        match self {
            Rule::Menstrual => ctx
                .sorted
                .iter()
                .any(|i| i.contains(day))
                .then_some(Phase::Menstrual),
            Rule::RequireProjection => {
                if ctx.projection.is_some() {
                    return None;
                }
                let shortfall = match ctx.sorted.len() {
                    0 => DataShortfall::NoIntervals,
                    1 => DataShortfall::SingleInterval,
                    _ => DataShortfall::AwaitingData,
                };
                Some(Phase::InsufficientData(shortfall))
            }
            Rule::OvulationDay => {
                let p = ctx.projection?;
                day.is_same_day(p.ovulation).then_some(Phase::OvulationDay)
            }
            Rule::FertileWindow => {
                let p = ctx.projection?;
                p.fertile_window.contains(day).then_some(Phase::Fertile)
            }
            Rule::Luteal => {
                let p = ctx.projection?;
                (day > p.fertile_window.end && day < p.next_period_start).then_some(Phase::Luteal)
            }
            Rule::Follicular => {
                let p = ctx.projection?;
                let after = ctx.last_period_end(&p)?;
                (day > after && day < p.fertile_window.start).then_some(Phase::Follicular)
            }
            Rule::NewCycleDue => {
                let p = ctx.projection?;
                (day >= p.next_period_start).then_some(Phase::NewCycleDue)
            }
            Rule::Fallback => Some(Phase::Undetermined),
        }
    }
}

/// Classify `day` against the logged intervals and an optional prediction.
pub fn classify(
    intervals: &[PeriodInterval],
    prediction: Option<&CyclePrediction>,
    day: Day,
) -> Phase {
    classify_traced(intervals, prediction, day).1
}

/// Like [`classify`], also reporting which rule matched.
pub fn classify_traced(
    intervals: &[PeriodInterval],
    prediction: Option<&CyclePrediction>,
    day: Day,
) -> (Rule, Phase) {
    let ctx = Context {
        day,
        sorted: sorted_by_start(intervals),
        prediction,
        projection: prediction.and_then(CyclePrediction::projection),
    };

    RULE_ORDER
        .iter()
        .find_map(|rule| rule.evaluate(&ctx).map(|phase| (*rule, phase)))
        .unwrap_or((Rule::Fallback, Phase::Undetermined))
}
