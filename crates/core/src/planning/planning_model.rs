//! Savings-plan projection and the required-contribution solver.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to the contribution solver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPlan {
    pub total_goal: Decimal,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    pub target_date: Option<NaiveDate>,
}

/// Derived view of a savings plan as of a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanProjection {
    pub total_goal: Decimal,
    /// Months until the target date, inclusive of the current partial month.
    /// Zero when no target date is set.
    pub months_remaining: i64,
    pub projected_savings: Decimal,
    pub on_track: bool,
    /// Smallest whole-unit monthly contribution that still reaches the goal
    /// in time. `None` when there is no positive month count to divide by;
    /// callers must then keep their previously persisted figure.
    pub required_monthly_contribution: Option<Decimal>,
}

/// Months between `today` and `target`, inclusive of the current partial
/// month (the `+ 1` convention, applied here and nowhere else).
///
/// The underlying difference counts full calendar months and truncates
/// toward zero, so a target earlier than `today` yields zero or negative
/// values which callers clamp.
pub fn months_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    difference_in_months(target, today) + 1
}

/// Whole calendar months from `earlier` to `later`, truncated toward zero.
fn difference_in_months(later: NaiveDate, earlier: NaiveDate) -> i64 {
    let mut months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
        + (i64::from(later.month()) - i64::from(earlier.month()));
    // Back off one month when the final partial month is not complete.
    if months > 0 && later.day() < earlier.day() {
        months -= 1;
    } else if months < 0 && later.day() > earlier.day() {
        months += 1;
    }
    months
}

/// `ceil(max(0, total − current) / months)` for `months > 0`, else `None`.
///
/// The ceiling is to whole currency units, making the result the smallest
/// non-negative integer contribution satisfying
/// `current + result × months ≥ total`.
pub fn required_monthly_contribution(
    total_goal: Decimal,
    current_savings: Decimal,
    months: i64,
) -> Option<Decimal> {
    if months <= 0 {
        return None;
    }
    let deficit = (total_goal - current_savings).max(Decimal::ZERO);
    Some((deficit / Decimal::from(months)).ceil())
}

impl SavingsPlan {
    /// Derives the full projection for this plan as of `today`.
    ///
    /// Reactive contract: this is recomputed from scratch on every call;
    /// nothing is cached, so any change to the inputs is reflected
    /// immediately.
    pub fn project(&self, today: NaiveDate) -> PlanProjection {
        let months = self
            .target_date
            .map(|target| months_remaining(target, today))
            .unwrap_or(0);

        let projected_savings =
            self.current_savings + self.monthly_contribution * Decimal::from(months.max(0));
        let on_track = projected_savings >= self.total_goal;

        PlanProjection {
            total_goal: self.total_goal,
            months_remaining: months,
            projected_savings,
            on_track,
            required_monthly_contribution: required_monthly_contribution(
                self.total_goal,
                self.current_savings,
                months,
            ),
        }
    }
}
