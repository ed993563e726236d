use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};

/// Trait for goal repository operations. Goals are scoped to one user and
/// returned in insertion order.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn count_goals(&self, user_id: &str) -> Result<i64>;
    async fn insert_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, update: GoalUpdate) -> Result<Goal>;
    /// Deletes the goal, returning the number of rows removed. The
    /// implementation must refuse, atomically with the delete itself, to
    /// remove the last remaining goal (`ConstraintViolation`).
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
    /// Atomic bulk replace of the whole ledger.
    async fn replace_goals(&self, user_id: &str, goals: Vec<NewGoal>) -> Result<Vec<Goal>>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn add_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, user_id: &str, update: GoalUpdate) -> Result<Goal>;
    /// Fails with `ConstraintViolation` when `goal_id` is the last remaining
    /// goal; the ledger is left unchanged.
    async fn remove_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
    /// Atomic bulk replace, used when the user applies a plan template.
    async fn apply_template(&self, user_id: &str, template: Vec<NewGoal>) -> Result<Vec<Goal>>;
    /// Total savings target: the sum of all goal amounts, recomputed on every
    /// call rather than cached.
    fn total(&self, user_id: &str) -> Result<Decimal>;
}
