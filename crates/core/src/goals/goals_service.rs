use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Service managing the per-user goal ledger.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.load_goals(user_id)
    }

    async fn add_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        self.goal_repository.insert_goal(user_id, new_goal).await
    }

    async fn update_goal(&self, user_id: &str, update: GoalUpdate) -> Result<Goal> {
        update.validate()?;
        self.goal_repository.update_goal(user_id, update).await
    }

    /// The last-goal guard lives in the repository, atomic with the delete;
    /// a count checked here first could go stale under concurrent removals.
    async fn remove_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let deleted = self.goal_repository.delete_goal(user_id, goal_id).await?;
        if deleted == 0 {
            return Err(Error::Database(crate::errors::DatabaseError::NotFound(
                format!("Goal {} not found", goal_id),
            )));
        }
        debug!("Removed goal {} for user {}", goal_id, user_id);
        Ok(())
    }

    async fn apply_template(&self, user_id: &str, template: Vec<NewGoal>) -> Result<Vec<Goal>> {
        if template.is_empty() {
            return Err(
                ValidationError::InvalidInput("Goal template cannot be empty".to_string()).into(),
            );
        }
        for goal in &template {
            goal.validate()?;
        }
        self.goal_repository.replace_goals(user_id, template).await
    }

    fn total(&self, user_id: &str) -> Result<Decimal> {
        let goals = self.goal_repository.load_goals(user_id)?;
        Ok(goals.iter().map(|g| g.amount).sum())
    }
}
