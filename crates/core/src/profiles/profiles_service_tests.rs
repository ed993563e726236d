#[cfg(test)]
mod tests {
    use crate::currency::Currency;
    use crate::errors::{DatabaseError, Error, Result};
    use crate::escrow::{EscrowServiceTrait, Milestone, PendingRelease, ReleaseDocument};
    use crate::goals::{Goal, GoalServiceTrait, GoalUpdate, NewGoal};
    use crate::profiles::{
        NewUserProfile, PlanUpdate, ProfileRepositoryTrait, ProfileService, ProfileServiceTrait,
        UserCredentials, UserProfile, UserSummary,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock ProfileRepository ---
    struct MockProfileRepository {
        profiles: Arc<Mutex<Vec<UserProfile>>>,
    }

    impl MockProfileRepository {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                profiles: Arc::new(Mutex::new(Vec::new())),
            })
        }
    }

    #[async_trait]
    impl ProfileRepositoryTrait for MockProfileRepository {
        fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
            self.find_profile(user_id)?.ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!("user {}", user_id)))
            })
        }

        fn find_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.user_id == user_id)
                .cloned())
        }

        fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.email == email)
                .map(|p| UserCredentials {
                    user_id: p.user_id.clone(),
                    email: p.email.clone(),
                    password_hash: "hash".to_string(),
                    is_admin: p.is_admin,
                    disabled: p.disabled,
                }))
        }

        fn list_users(&self) -> Result<Vec<UserSummary>> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .map(|p| UserSummary {
                    user_id: p.user_id.clone(),
                    email: p.email.clone(),
                    display_name: p.display_name.clone(),
                    is_admin: p.is_admin,
                    disabled: p.disabled,
                    created_at: p.created_at,
                })
                .collect())
        }

        async fn insert_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
            let (savings, contribution, target) =
                crate::profiles::default_plan_seed(Utc::now().date_naive());
            let profile = UserProfile {
                user_id: new_profile.id.unwrap_or_else(|| "generated".to_string()),
                email: new_profile.email,
                display_name: new_profile.display_name,
                currency: Currency::Gmd,
                current_savings: savings,
                monthly_contribution: contribution,
                target_date: target,
                is_admin: new_profile.is_admin,
                disabled: false,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(profile)
        }

        async fn update_plan(
            &self,
            user_id: &str,
            monthly_contribution: Decimal,
            target_date: Option<NaiveDate>,
        ) -> Result<UserProfile> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .iter_mut()
                .find(|p| p.user_id == user_id)
                .ok_or_else(|| Error::Unexpected("profile not found".to_string()))?;
            profile.monthly_contribution = monthly_contribution;
            profile.target_date = target_date;
            Ok(profile.clone())
        }

        async fn set_currency(&self, user_id: &str, currency: Currency) -> Result<UserProfile> {
            let mut profiles = self.profiles.lock().unwrap();
            let profile = profiles
                .iter_mut()
                .find(|p| p.user_id == user_id)
                .ok_or_else(|| Error::Unexpected("profile not found".to_string()))?;
            profile.currency = currency;
            Ok(profile.clone())
        }

        async fn set_disabled(&self, user_id: &str, disabled: bool) -> Result<()> {
            let mut profiles = self.profiles.lock().unwrap();
            if let Some(profile) = profiles.iter_mut().find(|p| p.user_id == user_id) {
                profile.disabled = disabled;
            }
            Ok(())
        }
    }

    // --- Mock GoalService ---
    struct MockGoalService {
        templates_applied: Arc<Mutex<Vec<Vec<NewGoal>>>>,
        total: Decimal,
    }

    impl MockGoalService {
        fn with_total(total: Decimal) -> Arc<Self> {
            Arc::new(Self {
                templates_applied: Arc::new(Mutex::new(Vec::new())),
                total,
            })
        }
    }

    #[async_trait]
    impl GoalServiceTrait for MockGoalService {
        fn get_goals(&self, _user_id: &str) -> Result<Vec<Goal>> {
            Ok(vec![])
        }

        async fn add_goal(&self, _user_id: &str, _new_goal: NewGoal) -> Result<Goal> {
            unimplemented!()
        }

        async fn update_goal(&self, _user_id: &str, _update: GoalUpdate) -> Result<Goal> {
            unimplemented!()
        }

        async fn remove_goal(&self, _user_id: &str, _goal_id: &str) -> Result<()> {
            unimplemented!()
        }

        async fn apply_template(
            &self,
            _user_id: &str,
            template: Vec<NewGoal>,
        ) -> Result<Vec<Goal>> {
            self.templates_applied.lock().unwrap().push(template);
            Ok(vec![])
        }

        fn total(&self, _user_id: &str) -> Result<Decimal> {
            Ok(self.total)
        }
    }

    // --- Mock EscrowService ---
    struct MockEscrowService {
        seeded_for: Arc<Mutex<Vec<String>>>,
    }

    impl MockEscrowService {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seeded_for: Arc::new(Mutex::new(Vec::new())),
            })
        }
    }

    #[async_trait]
    impl EscrowServiceTrait for MockEscrowService {
        fn get_milestones(&self, _user_id: &str) -> Result<Vec<Milestone>> {
            Ok(vec![])
        }

        fn list_pending_releases(&self) -> Result<Vec<PendingRelease>> {
            Ok(vec![])
        }

        async fn seed_default_schedule(&self, user_id: &str) -> Result<Vec<Milestone>> {
            self.seeded_for.lock().unwrap().push(user_id.to_string());
            Ok(vec![])
        }

        async fn request_release(
            &self,
            _user_id: &str,
            _milestone_id: &str,
            _documents: Vec<ReleaseDocument>,
        ) -> Result<Milestone> {
            unimplemented!()
        }

        async fn approve_release(&self, _milestone_id: &str) -> Result<Milestone> {
            unimplemented!()
        }

        async fn deny_release(&self, _milestone_id: &str) -> Result<Milestone> {
            unimplemented!()
        }
    }

    fn new_profile(id: &str) -> NewUserProfile {
        NewUserProfile {
            id: Some(id.to_string()),
            email: format!("{}@example.gm", id),
            display_name: "Awa Njie".to_string(),
            password_hash: "argon2-hash".to_string(),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn ensure_profile_seeds_goals_schedule_and_defaults() {
        let repo = MockProfileRepository::new();
        let goals = MockGoalService::with_total(dec!(2_500_000));
        let escrow = MockEscrowService::new();
        let service = ProfileService::new(repo.clone(), goals.clone(), escrow.clone());

        let profile = service.ensure_profile(new_profile("u1")).await.unwrap();

        assert_eq!(profile.current_savings, dec!(485_000));
        assert_eq!(profile.monthly_contribution, dec!(75_000));
        assert_eq!(profile.currency, Currency::Gmd);
        assert!(profile.target_date.is_some());

        let applied = goals.templates_applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].len(), 4);
        assert_eq!(escrow.seeded_for.lock().unwrap().as_slice(), ["u1"]);
    }

    #[tokio::test]
    async fn ensure_profile_is_idempotent() {
        let repo = MockProfileRepository::new();
        let goals = MockGoalService::with_total(Decimal::ZERO);
        let escrow = MockEscrowService::new();
        let service = ProfileService::new(repo.clone(), goals.clone(), escrow.clone());

        service.ensure_profile(new_profile("u1")).await.unwrap();
        service.ensure_profile(new_profile("u1")).await.unwrap();

        assert_eq!(repo.profiles.lock().unwrap().len(), 1);
        assert_eq!(goals.templates_applied.lock().unwrap().len(), 1);
        assert_eq!(escrow.seeded_for.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_plan_rejects_negative_contribution() {
        let repo = MockProfileRepository::new();
        let service = ProfileService::new(
            repo.clone(),
            MockGoalService::with_total(Decimal::ZERO),
            MockEscrowService::new(),
        );
        service.ensure_profile(new_profile("u1")).await.unwrap();

        let result = service
            .update_plan(
                "u1",
                PlanUpdate {
                    monthly_contribution: dec!(-1),
                    target_date: None,
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn set_currency_rejects_unknown_codes() {
        let repo = MockProfileRepository::new();
        let service = ProfileService::new(
            repo.clone(),
            MockGoalService::with_total(Decimal::ZERO),
            MockEscrowService::new(),
        );
        service.ensure_profile(new_profile("u1")).await.unwrap();

        assert!(matches!(
            service.set_currency("u1", "EUR").await,
            Err(Error::UnsupportedCurrency(_))
        ));
        let updated = service.set_currency("u1", "USD").await.unwrap();
        assert_eq!(updated.currency, Currency::Usd);
    }

    #[tokio::test]
    async fn project_plan_composes_goal_total_with_profile_figures() {
        let repo = MockProfileRepository::new();
        let service = ProfileService::new(
            repo.clone(),
            MockGoalService::with_total(dec!(1_250_000)),
            MockEscrowService::new(),
        );
        service.ensure_profile(new_profile("u1")).await.unwrap();
        service
            .update_plan(
                "u1",
                PlanUpdate {
                    monthly_contribution: dec!(25_500),
                    target_date: NaiveDate::from_ymd_opt(2026, 12, 1),
                },
            )
            .await
            .unwrap();

        let projection = service
            .project_plan("u1", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
            .unwrap();

        assert_eq!(projection.total_goal, dec!(1_250_000));
        assert_eq!(projection.months_remaining, 30);
        assert!(projection.on_track);
        assert_eq!(
            projection.required_monthly_contribution,
            Some(dec!(25_500))
        );
    }
}
