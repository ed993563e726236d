//! Escrow milestone domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};

/// Milestone lifecycle state.
///
/// ```text
/// Locked ──> Ready ──> ReleaseRequested ──> Completed (terminal)
///              ^              │
///              └── denied ────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneStatus {
    /// Earlier milestones are still open; no release can be requested yet.
    Locked,
    /// Eligible for a release request.
    Ready,
    /// Documents submitted, awaiting admin review. At most one outstanding
    /// request per milestone.
    ReleaseRequested,
    /// Release approved and funds disbursed. Terminal.
    Completed,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Locked => "LOCKED",
            MilestoneStatus::Ready => "READY",
            MilestoneStatus::ReleaseRequested => "RELEASE_REQUESTED",
            MilestoneStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for MilestoneStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOCKED" => Ok(MilestoneStatus::Locked),
            "READY" => Ok(MilestoneStatus::Ready),
            "RELEASE_REQUESTED" => Ok(MilestoneStatus::ReleaseRequested),
            "COMPLETED" => Ok(MilestoneStatus::Completed),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown milestone status '{}'",
                other
            ))
            .into()),
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verification document attached to a release request. Only the name and
/// a storage URL are kept; upload handling lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDocument {
    pub name: String,
    pub url: String,
}

/// A construction-phase milestone with its escrow-released amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: Decimal,
    pub status: MilestoneStatus,
    /// Ledger position; drives the sequential-unlock readiness policy.
    pub position: i32,
    pub documents: Vec<ReleaseDocument>,
    pub requested_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

/// Input model for seeding a milestone schedule.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestone {
    pub name: String,
    pub amount: Decimal,
    pub position: i32,
}

impl NewMilestone {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Milestone amount must be greater than zero, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }
}

/// Admin review-queue view of an outstanding release request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingRelease {
    pub milestone_id: String,
    pub user_id: String,
    pub milestone_name: String,
    pub amount: Decimal,
    pub requested_at: Option<DateTime<Utc>>,
    pub documents: Vec<ReleaseDocument>,
}
