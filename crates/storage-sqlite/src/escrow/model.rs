//! Database models for escrow milestones and their release documents.

use std::str::FromStr;

use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use buntubuild_core::escrow::{Milestone, MilestoneStatus, PendingRelease, ReleaseDocument};

use crate::utils::{parse_datetime_tolerant, parse_decimal_tolerant};

/// Database model for a milestone row.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::milestones)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub status: String,
    pub position: i32,
    pub requested_at: Option<String>,
    pub completed_at: Option<String>,
}

/// Database model for inserting a milestone row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::milestones)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestoneDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub status: String,
    pub position: i32,
}

/// Database model for a release document row.
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(MilestoneDB, foreign_key = milestone_id))]
#[diesel(table_name = crate::schema::milestone_documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDocumentDB {
    pub id: String,
    pub milestone_id: String,
    pub name: String,
    pub url: String,
    pub position: i32,
}

/// Database model for inserting a release document row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::milestone_documents)]
#[serde(rename_all = "camelCase")]
pub struct NewMilestoneDocumentDB {
    pub id: String,
    pub milestone_id: String,
    pub name: String,
    pub url: String,
    pub position: i32,
}

fn parse_status(value: &str, row_id: &str) -> MilestoneStatus {
    MilestoneStatus::from_str(value).unwrap_or_else(|e| {
        error!("Unknown milestone status '{}' on row {}: {}", value, row_id, e);
        MilestoneStatus::Locked
    })
}

impl MilestoneDB {
    pub fn into_domain(self, documents: Vec<ReleaseDocument>) -> Milestone {
        Milestone {
            status: parse_status(&self.status, &self.id),
            amount: parse_decimal_tolerant(&self.amount, "amount"),
            requested_at: self
                .requested_at
                .as_deref()
                .map(|v| parse_datetime_tolerant(v, "requested_at")),
            completed_at: self
                .completed_at
                .as_deref()
                .map(|v| parse_datetime_tolerant(v, "completed_at")),
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            position: self.position,
            documents,
        }
    }

    pub fn into_pending(self, documents: Vec<ReleaseDocument>) -> PendingRelease {
        PendingRelease {
            amount: parse_decimal_tolerant(&self.amount, "amount"),
            requested_at: self
                .requested_at
                .as_deref()
                .map(|v| parse_datetime_tolerant(v, "requested_at")),
            milestone_id: self.id,
            user_id: self.user_id,
            milestone_name: self.name,
            documents,
        }
    }
}

impl From<MilestoneDocumentDB> for ReleaseDocument {
    fn from(db: MilestoneDocumentDB) -> Self {
        Self {
            name: db.name,
            url: db.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_row() -> MilestoneDB {
        MilestoneDB {
            id: "m1".to_string(),
            user_id: "u1".to_string(),
            name: "Land Title Verification".to_string(),
            amount: "250000".to_string(),
            status: "RELEASE_REQUESTED".to_string(),
            position: 0,
            requested_at: Some("2025-05-10T12:00:00+00:00".to_string()),
            completed_at: None,
        }
    }

    #[test]
    fn test_milestone_conversion() {
        let docs = vec![ReleaseDocument {
            name: "title-deed.pdf".to_string(),
            url: "https://files.example.gm/title-deed.pdf".to_string(),
        }];
        let milestone = sample_row().into_domain(docs.clone());
        assert_eq!(milestone.status, MilestoneStatus::ReleaseRequested);
        assert_eq!(milestone.amount, dec!(250000));
        assert!(milestone.requested_at.is_some());
        assert_eq!(milestone.documents, docs);
    }

    #[test]
    fn test_unknown_status_falls_back_to_locked() {
        let mut row = sample_row();
        row.status = "EXPLODED".to_string();
        assert_eq!(row.into_domain(vec![]).status, MilestoneStatus::Locked);
    }

    #[test]
    fn test_pending_view_conversion() {
        let pending = sample_row().into_pending(vec![]);
        assert_eq!(pending.milestone_id, "m1");
        assert_eq!(pending.milestone_name, "Land Title Verification");
    }
}
