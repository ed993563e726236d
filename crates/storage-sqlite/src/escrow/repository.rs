use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use buntubuild_core::errors::{DatabaseError, Error};
use buntubuild_core::escrow::{
    EscrowRepositoryTrait, Milestone, MilestoneStatus, NewMilestone, PendingRelease,
    ReleaseDocument,
};
use buntubuild_core::transactions::NewTransaction;
use buntubuild_core::Result;
use rust_decimal::Decimal;

use super::model::{MilestoneDB, MilestoneDocumentDB, NewMilestoneDB, NewMilestoneDocumentDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{milestone_documents, milestones};
use crate::transactions::append_entry;
use crate::utils::format_datetime;

pub struct EscrowRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl EscrowRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        EscrowRepository { pool, writer }
    }

    /// Loads documents for a set of milestone rows, grouped by milestone id
    /// in their stored order.
    fn documents_for(
        conn: &mut SqliteConnection,
        milestone_ids: &[String],
    ) -> Result<HashMap<String, Vec<ReleaseDocument>>> {
        let rows = milestone_documents::table
            .filter(milestone_documents::milestone_id.eq_any(milestone_ids))
            .order(milestone_documents::position.asc())
            .load::<MilestoneDocumentDB>(conn)
            .map_err(StorageError::from)?;
        let mut grouped: HashMap<String, Vec<ReleaseDocument>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.milestone_id.clone())
                .or_default()
                .push(ReleaseDocument::from(row));
        }
        Ok(grouped)
    }

    fn replace_documents(
        conn: &mut SqliteConnection,
        milestone_id: &str,
        documents: Vec<ReleaseDocument>,
    ) -> Result<()> {
        diesel::delete(
            milestone_documents::table
                .filter(milestone_documents::milestone_id.eq(milestone_id)),
        )
        .execute(conn)
        .map_err(StorageError::from)?;

        let rows: Vec<NewMilestoneDocumentDB> = documents
            .into_iter()
            .enumerate()
            .map(|(i, d)| NewMilestoneDocumentDB {
                id: Uuid::new_v4().to_string(),
                milestone_id: milestone_id.to_string(),
                name: d.name,
                url: d.url,
                position: i as i32,
            })
            .collect();
        if !rows.is_empty() {
            diesel::insert_into(milestone_documents::table)
                .values(&rows)
                .execute(conn)
                .map_err(StorageError::from)?;
        }
        Ok(())
    }

    fn attach_documents(
        conn: &mut SqliteConnection,
        rows: Vec<MilestoneDB>,
    ) -> Result<Vec<Milestone>> {
        let ids: Vec<String> = rows.iter().map(|m| m.id.clone()).collect();
        let mut documents = Self::documents_for(conn, &ids)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let docs = documents.remove(&row.id).unwrap_or_default();
                row.into_domain(docs)
            })
            .collect())
    }
}

#[async_trait]
impl EscrowRepositoryTrait for EscrowRepository {
    fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = milestones::table
            .filter(milestones::user_id.eq(user_id))
            .order(milestones::position.asc())
            .load::<MilestoneDB>(&mut conn)
            .map_err(StorageError::from)?;
        Self::attach_documents(&mut conn, rows)
    }

    fn get_milestone(&self, milestone_id: &str) -> Result<Milestone> {
        let mut conn = get_connection(&self.pool)?;
        let row = milestones::table
            .find(milestone_id)
            .first::<MilestoneDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Milestone {} not found",
                    milestone_id
                )))
            })?;
        let mut milestones = Self::attach_documents(&mut conn, vec![row])?;
        Ok(milestones.remove(0))
    }

    fn list_pending_releases(&self) -> Result<Vec<PendingRelease>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = milestones::table
            .filter(milestones::status.eq(MilestoneStatus::ReleaseRequested.as_str()))
            .order(milestones::requested_at.asc())
            .load::<MilestoneDB>(&mut conn)
            .map_err(StorageError::from)?;
        let ids: Vec<String> = rows.iter().map(|m| m.id.clone()).collect();
        let mut documents = Self::documents_for(&mut conn, &ids)?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let docs = documents.remove(&row.id).unwrap_or_default();
                row.into_pending(docs)
            })
            .collect())
    }

    /// Inserts the schedule in position order. The first milestone starts
    /// `Ready`, the rest `Locked`.
    async fn seed_schedule(
        &self,
        user_id: &str,
        schedule: Vec<NewMilestone>,
    ) -> Result<Vec<Milestone>> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vec<Milestone>> {
                let rows: Vec<NewMilestoneDB> = schedule
                    .into_iter()
                    .map(|m| NewMilestoneDB {
                        id: Uuid::new_v4().to_string(),
                        user_id: owner.clone(),
                        name: m.name,
                        amount: m.amount.to_string(),
                        status: if m.position == 0 {
                            MilestoneStatus::Ready.as_str().to_string()
                        } else {
                            MilestoneStatus::Locked.as_str().to_string()
                        },
                        position: m.position,
                    })
                    .collect();
                diesel::insert_into(milestones::table)
                    .values(&rows)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let inserted = milestones::table
                    .filter(milestones::user_id.eq(&owner))
                    .order(milestones::position.asc())
                    .load::<MilestoneDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(inserted
                    .into_iter()
                    .map(|row| row.into_domain(Vec::new()))
                    .collect())
            })
            .await
    }

    /// Compare-and-set on the status column. The WHERE clause carries the
    /// expected source state, so a concurrent transition leaves this update
    /// matching zero rows instead of clobbering the newer state.
    async fn transition_status(
        &self,
        milestone_id: &str,
        from: MilestoneStatus,
        to: MilestoneStatus,
        at: DateTime<Utc>,
    ) -> Result<usize> {
        let milestone_id = milestone_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let target = milestones::table
                    .find(&milestone_id)
                    .filter(milestones::status.eq(from.as_str()));
                let moved = match to {
                    MilestoneStatus::ReleaseRequested => diesel::update(target)
                        .set((
                            milestones::status.eq(to.as_str()),
                            milestones::requested_at.eq(Some(format_datetime(at))),
                        ))
                        .execute(conn),
                    MilestoneStatus::Completed => diesel::update(target)
                        .set((
                            milestones::status.eq(to.as_str()),
                            milestones::completed_at.eq(Some(format_datetime(at))),
                        ))
                        .execute(conn),
                    // Ready (unlock or denial) clears any stale request stamp.
                    _ => diesel::update(target)
                        .set((
                            milestones::status.eq(to.as_str()),
                            milestones::requested_at.eq(None::<String>),
                        ))
                        .execute(conn),
                };
                Ok(moved.map_err(StorageError::from)?)
            })
            .await
    }

    /// The CAS and the document replacement run in one writer transaction:
    /// a request that loses the CAS attaches nothing.
    async fn request_release(
        &self,
        milestone_id: &str,
        documents: Vec<ReleaseDocument>,
        at: DateTime<Utc>,
    ) -> Result<usize> {
        let milestone_id = milestone_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let moved = diesel::update(
                    milestones::table
                        .find(&milestone_id)
                        .filter(milestones::status.eq(MilestoneStatus::Ready.as_str())),
                )
                .set((
                    milestones::status.eq(MilestoneStatus::ReleaseRequested.as_str()),
                    milestones::requested_at.eq(Some(format_datetime(at))),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                if moved == 0 {
                    return Ok(0);
                }
                Self::replace_documents(conn, &milestone_id, documents)?;
                Ok(moved)
            })
            .await
    }

    /// The CAS and the RELEASE ledger entry share one writer transaction, so
    /// a completed milestone always has its entry and a lost CAS writes
    /// nothing. RELEASE entries never touch the savings balance.
    async fn complete_release(
        &self,
        milestone_id: &str,
        release: NewTransaction,
        at: DateTime<Utc>,
    ) -> Result<usize> {
        let milestone_id = milestone_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let moved = diesel::update(
                    milestones::table
                        .find(&milestone_id)
                        .filter(milestones::status.eq(MilestoneStatus::ReleaseRequested.as_str())),
                )
                .set((
                    milestones::status.eq(MilestoneStatus::Completed.as_str()),
                    milestones::completed_at.eq(Some(format_datetime(at))),
                ))
                .execute(conn)
                .map_err(StorageError::from)?;
                if moved == 0 {
                    return Ok(0);
                }
                let owner: String = milestones::table
                    .find(&milestone_id)
                    .select(milestones::user_id)
                    .first(conn)
                    .map_err(StorageError::from)?;
                append_entry(conn, &owner, release, Decimal::ZERO)?;
                Ok(moved)
            })
            .await
    }
}
