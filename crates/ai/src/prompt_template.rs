//! Versioned prompt template for the contribution advisor.
//!
//! The template carries `{{placeholder}}` markers that are substituted from
//! the request. Version bumps accompany any wording change so provider-side
//! behavior shifts can be traced to a prompt revision.

use once_cell::sync::Lazy;

use crate::types::ContributionSuggestionRequest;

/// Current prompt template version.
pub const PROMPT_TEMPLATE_VERSION: u32 = 1;

static CONTRIBUTION_PROMPT: Lazy<String> = Lazy::new(|| {
    [
        "You are a savings advisor for Gambians building a home. \
         Given the figures below, suggest a realistic monthly contribution \
         in whole dalasis and explain your reasoning in two or three \
         sentences. Keep the contribution under half the monthly income.",
        "",
        "Total savings goal: {{savingsGoal}}",
        "Target build date: {{targetBuildDate}}",
        "Current savings: {{currentSavings}}",
        "Monthly income: {{monthlyIncome}}",
        "",
        "Respond with JSON: {\"suggestedMonthlyContribution\": <integer>, \
         \"reasoning\": <string>}.",
    ]
    .join("\n")
});

/// Renders the contribution prompt for a validated request.
pub fn render_contribution_prompt(request: &ContributionSuggestionRequest) -> String {
    CONTRIBUTION_PROMPT
        .replace("{{savingsGoal}}", &request.savings_goal.to_string())
        .replace("{{targetBuildDate}}", &request.target_build_date)
        .replace("{{currentSavings}}", &request.current_savings.to_string())
        .replace("{{monthlyIncome}}", &request.monthly_income.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let request = ContributionSuggestionRequest {
            savings_goal: dec!(2_500_000),
            target_build_date: "2026-12-01".to_string(),
            current_savings: dec!(485_000),
            monthly_income: dec!(120_000),
        };
        let prompt = render_contribution_prompt(&request);
        assert!(prompt.contains("2500000"));
        assert!(prompt.contains("2026-12-01"));
        assert!(prompt.contains("485000"));
        assert!(prompt.contains("120000"));
        assert!(!prompt.contains("{{"));
    }
}
