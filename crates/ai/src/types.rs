//! Advisor request/response DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};

/// Minimum plausible monthly income; anything lower is treated as a typo
/// rather than sent to the provider.
pub const MIN_MONTHLY_INCOME: i64 = 5_000;

/// Figures the advisor reasons over. Amounts are whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSuggestionRequest {
    pub savings_goal: Decimal,
    /// Target build date as `YYYY-MM-DD`.
    pub target_build_date: String,
    pub current_savings: Decimal,
    pub monthly_income: Decimal,
}

impl ContributionSuggestionRequest {
    pub fn validate(&self) -> AdvisorResult<()> {
        if self.savings_goal <= Decimal::ZERO {
            return Err(AdvisorError::invalid_input(
                "Savings goal must be greater than zero",
            ));
        }
        if self.current_savings < Decimal::ZERO {
            return Err(AdvisorError::invalid_input(
                "Current savings cannot be negative",
            ));
        }
        if self.monthly_income < Decimal::from(MIN_MONTHLY_INCOME) {
            return Err(AdvisorError::invalid_input(format!(
                "Monthly income must be at least {}",
                MIN_MONTHLY_INCOME
            )));
        }
        self.parsed_target_date()?;
        Ok(())
    }

    pub fn parsed_target_date(&self) -> AdvisorResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.target_build_date, "%Y-%m-%d").map_err(|_| {
            AdvisorError::invalid_input(format!(
                "Target build date '{}' is not a valid YYYY-MM-DD date",
                self.target_build_date
            ))
        })
    }
}

/// The advisor's answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionSuggestion {
    /// Whole currency units per month.
    pub suggested_monthly_contribution: i64,
    /// Short rationale shown verbatim to the user.
    pub reasoning: String,
}
