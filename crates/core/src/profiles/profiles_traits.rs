use async_trait::async_trait;
use chrono::NaiveDate;

use crate::currency::Currency;
use crate::errors::Result;
use crate::planning::PlanProjection;
use crate::profiles::profiles_model::{
    NewUserProfile, PlanUpdate, UserCredentials, UserProfile, UserSummary,
};

/// Trait for profile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    fn find_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    fn list_users(&self) -> Result<Vec<UserSummary>>;
    async fn insert_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile>;
    async fn update_plan(
        &self,
        user_id: &str,
        monthly_contribution: rust_decimal::Decimal,
        target_date: Option<NaiveDate>,
    ) -> Result<UserProfile>;
    async fn set_currency(&self, user_id: &str, currency: Currency) -> Result<UserProfile>;
    async fn set_disabled(&self, user_id: &str, disabled: bool) -> Result<()>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Idempotent sign-up: creates the profile with the seeded default plan
    /// (goals, escrow schedule, opening figures) unless it already exists.
    async fn ensure_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile>;
    fn get_profile(&self, user_id: &str) -> Result<UserProfile>;
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    /// Persists the goal-settings form write (contribution + target date).
    async fn update_plan(&self, user_id: &str, update: PlanUpdate) -> Result<UserProfile>;
    async fn set_currency(&self, user_id: &str, code: &str) -> Result<UserProfile>;
    /// Derives the full plan projection (total goal, months remaining,
    /// on-track flag, required contribution) as of `today`.
    fn project_plan(&self, user_id: &str, today: NaiveDate) -> Result<PlanProjection>;
    // Admin console operations; route-level guards enforce authorization.
    fn list_users(&self) -> Result<Vec<UserSummary>>;
    async fn set_disabled(&self, user_id: &str, disabled: bool) -> Result<()>;
}
