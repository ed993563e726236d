#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::super::{months_remaining, required_monthly_contribution, SavingsPlan};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn months_remaining_is_inclusive_of_current_month() {
        let today = date(2024, 7, 1);
        assert_eq!(months_remaining(date(2027, 1, 1), today), 31);
        assert_eq!(months_remaining(date(2024, 8, 1), today), 2);
        assert_eq!(months_remaining(date(2024, 7, 15), today), 1);
    }

    #[test]
    fn months_remaining_truncates_partial_final_month() {
        // 2024-07-20 -> 2024-09-10 is one full month plus change.
        assert_eq!(months_remaining(date(2024, 9, 10), date(2024, 7, 20)), 2);
        // Past target dates go to zero or below; callers clamp.
        assert!(months_remaining(date(2024, 1, 1), date(2024, 7, 1)) <= 0);
    }

    #[test]
    fn solver_matches_reference_scenario() {
        // Goals Land 750k + Foundation 500k, savings 485k, 30 months out.
        let today = date(2024, 7, 1);
        let plan = SavingsPlan {
            total_goal: dec!(1_250_000),
            current_savings: dec!(485_000),
            monthly_contribution: dec!(75_000),
            target_date: Some(date(2026, 12, 1)),
        };
        let projection = plan.project(today);

        assert_eq!(projection.months_remaining, 30);
        assert_eq!(
            projection.required_monthly_contribution,
            Some(dec!(25_500))
        );
    }

    #[test]
    fn required_contribution_is_minimal() {
        let months = 30;
        let required =
            required_monthly_contribution(dec!(1_250_000), dec!(485_000), months).unwrap();

        // Satisfies the goal...
        assert!(dec!(485_000) + required * Decimal::from(months) >= dec!(1_250_000));
        // ...and one unit less does not.
        assert!(
            dec!(485_000) + (required - Decimal::ONE) * Decimal::from(months) < dec!(1_250_000)
        );
    }

    #[test]
    fn required_contribution_is_zero_when_goal_already_met() {
        assert_eq!(
            required_monthly_contribution(dec!(100_000), dec!(150_000), 12),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn solver_guards_against_zero_months() {
        assert_eq!(required_monthly_contribution(dec!(100_000), dec!(0), 0), None);
        assert_eq!(
            required_monthly_contribution(dec!(100_000), dec!(0), -3),
            None
        );

        let plan = SavingsPlan {
            total_goal: dec!(100_000),
            current_savings: dec!(10_000),
            monthly_contribution: dec!(5_000),
            target_date: None,
        };
        let projection = plan.project(date(2024, 7, 1));
        assert_eq!(projection.months_remaining, 0);
        assert_eq!(projection.projected_savings, dec!(10_000));
        assert_eq!(projection.required_monthly_contribution, None);
    }

    #[test]
    fn on_track_is_monotone_in_savings_and_contribution() {
        let today = date(2024, 7, 1);
        let base = SavingsPlan {
            total_goal: dec!(1_250_000),
            current_savings: dec!(485_000),
            monthly_contribution: dec!(25_500),
            target_date: Some(date(2026, 12, 1)),
        };
        assert!(base.project(today).on_track);

        for bump in [dec!(1), dec!(10_000), dec!(500_000)] {
            let mut richer = base.clone();
            richer.current_savings += bump;
            assert!(richer.project(today).on_track);

            let mut steadier = base.clone();
            steadier.monthly_contribution += bump;
            assert!(steadier.project(today).on_track);
        }
    }

    #[test]
    fn projection_clamps_negative_months_to_zero_contributions() {
        let plan = SavingsPlan {
            total_goal: dec!(500_000),
            current_savings: dec!(100_000),
            monthly_contribution: dec!(50_000),
            target_date: Some(date(2023, 1, 1)),
        };
        let projection = plan.project(date(2024, 7, 1));
        assert_eq!(projection.projected_savings, dec!(100_000));
        assert!(!projection.on_track);
    }
}
