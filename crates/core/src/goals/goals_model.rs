//! Goal domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A named construction sub-goal with its savings target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

/// Input model for creating a goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub id: Option<String>,
    pub name: String,
    pub amount: Decimal,
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.amount)
    }
}

/// Input model for editing an existing goal.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        validate_goal_fields(&self.name, self.amount)
    }
}

fn validate_goal_fields(name: &str, amount: Decimal) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Goal amount must be greater than zero, got {}",
            amount
        ))
        .into());
    }
    Ok(())
}
