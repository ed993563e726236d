use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Months, NaiveDate};
use log::info;
use rust_decimal::Decimal;

use crate::constants::{
    DEFAULT_CURRENT_SAVINGS, DEFAULT_GOALS, DEFAULT_MONTHLY_CONTRIBUTION,
    DEFAULT_TARGET_MONTHS_AHEAD,
};
use crate::currency::Currency;
use crate::errors::Result;
use crate::escrow::EscrowServiceTrait;
use crate::goals::{GoalServiceTrait, NewGoal};
use crate::planning::{PlanProjection, SavingsPlan};
use crate::profiles::profiles_model::{
    NewUserProfile, PlanUpdate, UserCredentials, UserProfile, UserSummary,
};
use crate::profiles::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};

/// Service managing user profiles and the seeded default plan.
pub struct ProfileService {
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
    escrow_service: Arc<dyn EscrowServiceTrait>,
}

impl ProfileService {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
        escrow_service: Arc<dyn EscrowServiceTrait>,
    ) -> Self {
        Self {
            profile_repository,
            goal_service,
            escrow_service,
        }
    }

    fn default_goal_template() -> Vec<NewGoal> {
        DEFAULT_GOALS
            .iter()
            .map(|(slug, name, amount)| NewGoal {
                id: Some((*slug).to_string()),
                name: (*name).to_string(),
                amount: (*amount).into(),
            })
            .collect()
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn ensure_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
        new_profile.validate()?;

        if let Some(id) = new_profile.id.as_deref() {
            if let Some(existing) = self.profile_repository.find_profile(id)? {
                return Ok(existing);
            }
        }

        let profile = self.profile_repository.insert_profile(new_profile).await?;
        self.goal_service
            .apply_template(&profile.user_id, Self::default_goal_template())
            .await?;
        self.escrow_service
            .seed_default_schedule(&profile.user_id)
            .await?;

        info!(
            "Seeded profile {} with {} savings and {} monthly",
            profile.user_id, DEFAULT_CURRENT_SAVINGS, DEFAULT_MONTHLY_CONTRIBUTION
        );
        self.profile_repository.get_profile(&profile.user_id)
    }

    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.profile_repository.get_profile(user_id)
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        self.profile_repository.find_credentials_by_email(email)
    }

    async fn update_plan(&self, user_id: &str, update: PlanUpdate) -> Result<UserProfile> {
        update.validate()?;
        self.profile_repository
            .update_plan(user_id, update.monthly_contribution, update.target_date)
            .await
    }

    async fn set_currency(&self, user_id: &str, code: &str) -> Result<UserProfile> {
        let currency = Currency::from_str(code)?;
        self.profile_repository.set_currency(user_id, currency).await
    }

    fn project_plan(&self, user_id: &str, today: NaiveDate) -> Result<PlanProjection> {
        let profile = self.profile_repository.get_profile(user_id)?;
        let plan = SavingsPlan {
            total_goal: self.goal_service.total(user_id)?,
            current_savings: profile.current_savings,
            monthly_contribution: profile.monthly_contribution,
            target_date: profile.target_date,
        };
        Ok(plan.project(today))
    }

    fn list_users(&self) -> Result<Vec<UserSummary>> {
        self.profile_repository.list_users()
    }

    async fn set_disabled(&self, user_id: &str, disabled: bool) -> Result<()> {
        self.profile_repository.set_disabled(user_id, disabled).await
    }
}

/// Default plan figures applied when the storage layer inserts a fresh
/// profile row: (current savings, monthly contribution, target date).
pub fn default_plan_seed(today: NaiveDate) -> (Decimal, Decimal, Option<NaiveDate>) {
    let target = today.checked_add_months(Months::new(DEFAULT_TARGET_MONTHS_AHEAD));
    (
        Decimal::from(DEFAULT_CURRENT_SAVINGS),
        Decimal::from(DEFAULT_MONTHLY_CONTRIBUTION),
        target,
    )
}
