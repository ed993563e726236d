use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::escrow::escrow_model::{
    Milestone, MilestoneStatus, NewMilestone, PendingRelease, ReleaseDocument,
};
use crate::transactions::NewTransaction;

/// Trait for milestone repository operations. Milestones are returned in
/// schedule (`position`) order.
#[async_trait]
pub trait EscrowRepositoryTrait: Send + Sync {
    fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    fn get_milestone(&self, milestone_id: &str) -> Result<Milestone>;
    fn list_pending_releases(&self) -> Result<Vec<PendingRelease>>;
    async fn seed_schedule(
        &self,
        user_id: &str,
        schedule: Vec<NewMilestone>,
    ) -> Result<Vec<Milestone>>;
    /// Compare-and-set status transition. Returns the number of rows moved
    /// (zero when the milestone was not in `from`), letting the service
    /// detect state conflicts without a read-modify-write race.
    async fn transition_status(
        &self,
        milestone_id: &str,
        from: MilestoneStatus,
        to: MilestoneStatus,
        at: DateTime<Utc>,
    ) -> Result<usize>;
    /// Compare-and-set `Ready -> ReleaseRequested` and, when the row moves,
    /// replace the attached documents in the same storage transaction.
    /// Returns rows moved; zero means nothing was written.
    async fn request_release(
        &self,
        milestone_id: &str,
        documents: Vec<ReleaseDocument>,
        at: DateTime<Utc>,
    ) -> Result<usize>;
    /// Compare-and-set `ReleaseRequested -> Completed` and, when the row
    /// moves, append `release` to the owner's ledger in the same storage
    /// transaction. A milestone is never completed without its ledger entry.
    /// Returns rows moved; zero means nothing was written.
    async fn complete_release(
        &self,
        milestone_id: &str,
        release: NewTransaction,
        at: DateTime<Utc>,
    ) -> Result<usize>;
}

/// Trait for escrow service operations.
///
/// Admin-only operations (`approve_release`, `deny_release`,
/// `list_pending_releases`) rely on the caller for authorization; the HTTP
/// layer guards those routes.
#[async_trait]
pub trait EscrowServiceTrait: Send + Sync {
    fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>>;
    fn list_pending_releases(&self) -> Result<Vec<PendingRelease>>;
    /// Seeds the default milestone schedule for a fresh profile. The first
    /// milestone starts `Ready`, the rest `Locked`.
    async fn seed_default_schedule(&self, user_id: &str) -> Result<Vec<Milestone>>;
    /// `Ready -> ReleaseRequested` with the submitted documents (zero
    /// documents allowed). Any other source state is a `StateConflict`.
    async fn request_release(
        &self,
        user_id: &str,
        milestone_id: &str,
        documents: Vec<ReleaseDocument>,
    ) -> Result<Milestone>;
    /// `ReleaseRequested -> Completed`; emits a RELEASE ledger entry for the
    /// milestone amount and unlocks the next milestone in the schedule.
    async fn approve_release(&self, milestone_id: &str) -> Result<Milestone>;
    /// `ReleaseRequested -> Ready`; no ledger entry, the milestone becomes
    /// eligible for a new request.
    async fn deny_release(&self, milestone_id: &str) -> Result<Milestone>;
}
