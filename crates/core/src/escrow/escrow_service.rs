use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::constants::DEFAULT_MILESTONES;
use crate::errors::{Error, Result};
use crate::escrow::escrow_model::{
    Milestone, MilestoneStatus, NewMilestone, PendingRelease, ReleaseDocument,
};
use crate::escrow::escrow_traits::{EscrowRepositoryTrait, EscrowServiceTrait};
use crate::transactions::{NewTransaction, TransactionType};

/// Service driving the milestone release lifecycle.
///
/// Transitions with side effects (document attachment, the RELEASE ledger
/// entry) go through the repository's combined operations, which run the
/// compare-and-set and the side effect in one storage transaction.
pub struct EscrowService {
    escrow_repository: Arc<dyn EscrowRepositoryTrait>,
}

impl EscrowService {
    pub fn new(escrow_repository: Arc<dyn EscrowRepositoryTrait>) -> Self {
        Self { escrow_repository }
    }

    fn state_conflict(milestone: &Milestone, attempted: &str) -> Error {
        Error::StateConflict(format!(
            "Milestone '{}' is {}; cannot {}",
            milestone.name, milestone.status, attempted
        ))
    }

    /// Sequential-unlock readiness: the earliest locked milestone becomes
    /// ready once every milestone before it is completed.
    async fn unlock_next(&self, user_id: &str) -> Result<()> {
        let milestones = self.escrow_repository.load_milestones(user_id)?;
        let mut all_prior_completed = true;
        for milestone in &milestones {
            if milestone.status == MilestoneStatus::Locked && all_prior_completed {
                self.escrow_repository
                    .transition_status(
                        &milestone.id,
                        MilestoneStatus::Locked,
                        MilestoneStatus::Ready,
                        Utc::now(),
                    )
                    .await?;
                debug!("Unlocked milestone '{}' for user {}", milestone.name, user_id);
                break;
            }
            all_prior_completed = all_prior_completed && milestone.is_completed();
        }
        Ok(())
    }
}

#[async_trait]
impl EscrowServiceTrait for EscrowService {
    fn get_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
        self.escrow_repository.load_milestones(user_id)
    }

    fn list_pending_releases(&self) -> Result<Vec<PendingRelease>> {
        self.escrow_repository.list_pending_releases()
    }

    async fn seed_default_schedule(&self, user_id: &str) -> Result<Vec<Milestone>> {
        let schedule: Vec<NewMilestone> = DEFAULT_MILESTONES
            .iter()
            .enumerate()
            .map(|(i, (name, amount))| NewMilestone {
                name: (*name).to_string(),
                amount: (*amount).into(),
                position: i as i32,
            })
            .collect();
        for milestone in &schedule {
            milestone.validate()?;
        }
        self.escrow_repository.seed_schedule(user_id, schedule).await
    }

    async fn request_release(
        &self,
        user_id: &str,
        milestone_id: &str,
        documents: Vec<ReleaseDocument>,
    ) -> Result<Milestone> {
        let milestone = self.escrow_repository.get_milestone(milestone_id)?;
        if milestone.user_id != user_id {
            return Err(Error::Unauthorized(format!(
                "Milestone {} does not belong to user {}",
                milestone_id, user_id
            )));
        }

        let moved = self
            .escrow_repository
            .request_release(milestone_id, documents, Utc::now())
            .await?;
        if moved == 0 {
            return Err(Self::state_conflict(&milestone, "request a release"));
        }

        self.escrow_repository.get_milestone(milestone_id)
    }

    async fn approve_release(&self, milestone_id: &str) -> Result<Milestone> {
        let milestone = self.escrow_repository.get_milestone(milestone_id)?;

        // The compare-and-set guards against double approval; the RELEASE
        // entry is appended in the same storage transaction, so only the
        // caller that actually moves the row emits it, and a milestone is
        // never left completed without its ledger entry.
        let release = NewTransaction {
            id: None,
            transaction_type: TransactionType::Release,
            description: milestone.name.clone(),
            amount: milestone.amount,
            date: Utc::now().date_naive(),
        };
        let moved = self
            .escrow_repository
            .complete_release(milestone_id, release, Utc::now())
            .await?;
        if moved == 0 {
            return Err(Self::state_conflict(&milestone, "approve a release"));
        }

        self.unlock_next(&milestone.user_id).await?;
        self.escrow_repository.get_milestone(milestone_id)
    }

    async fn deny_release(&self, milestone_id: &str) -> Result<Milestone> {
        let milestone = self.escrow_repository.get_milestone(milestone_id)?;

        let moved = self
            .escrow_repository
            .transition_status(
                milestone_id,
                MilestoneStatus::ReleaseRequested,
                MilestoneStatus::Ready,
                Utc::now(),
            )
            .await?;
        if moved == 0 {
            return Err(Self::state_conflict(&milestone, "deny a release"));
        }

        debug!("Denied release for milestone '{}'", milestone.name);
        self.escrow_repository.get_milestone(milestone_id)
    }
}
