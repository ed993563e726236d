//! Profile domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::errors::{Result, ValidationError};

/// A user's savings profile.
///
/// `is_admin` is the authorization source of truth; any admin flag carried in
/// a session token is a projection of this field stamped at token issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub currency: Currency,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    pub target_date: Option<NaiveDate>,
    pub is_admin: bool,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a profile at sign-up.
///
/// The password hash is opaque to this crate; hashing and verification live
/// at the HTTP layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProfile {
    pub id: Option<String>,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl NewUserProfile {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(
                ValidationError::InvalidInput("A valid email address is required".to_string())
                    .into(),
            );
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::MissingField("displayName".to_string()).into());
        }
        if self.password_hash.trim().is_empty() {
            return Err(ValidationError::MissingField("passwordHash".to_string()).into());
        }
        Ok(())
    }
}

/// The goal-settings form write: contribution figure plus target date.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    pub monthly_contribution: Decimal,
    pub target_date: Option<NaiveDate>,
}

impl PlanUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.monthly_contribution < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Monthly contribution cannot be negative, got {}",
                self.monthly_contribution
            ))
            .into());
        }
        Ok(())
    }
}

/// Credential lookup result for sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub disabled: bool,
}

/// Admin console row for the user-management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub is_admin: bool,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
}
