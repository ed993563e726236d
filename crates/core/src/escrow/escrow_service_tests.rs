#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::escrow::escrow_model::{
        Milestone, MilestoneStatus, NewMilestone, PendingRelease, ReleaseDocument,
    };
    use crate::escrow::{EscrowRepositoryTrait, EscrowService, EscrowServiceTrait};
    use crate::transactions::NewTransaction;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock EscrowRepository ---
    //
    // The combined operations (request_release, complete_release) mutate the
    // milestone and record the side effect under one lock, mirroring the
    // single-transaction contract of the trait.
    struct MockEscrowRepository {
        milestones: Arc<Mutex<Vec<Milestone>>>,
        released: Arc<Mutex<Vec<NewTransaction>>>,
    }

    impl MockEscrowRepository {
        fn with_milestones(milestones: Vec<Milestone>) -> Arc<Self> {
            Arc::new(Self {
                milestones: Arc::new(Mutex::new(milestones)),
                released: Arc::new(Mutex::new(Vec::new())),
            })
        }

        fn released(&self) -> Vec<NewTransaction> {
            self.released.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EscrowRepositoryTrait for MockEscrowRepository {
        fn load_milestones(&self, user_id: &str) -> Result<Vec<Milestone>> {
            let mut ms: Vec<Milestone> = self
                .milestones
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.user_id == user_id)
                .cloned()
                .collect();
            ms.sort_by_key(|m| m.position);
            Ok(ms)
        }

        fn get_milestone(&self, milestone_id: &str) -> Result<Milestone> {
            self.milestones
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == milestone_id)
                .cloned()
                .ok_or_else(|| Error::Unexpected("milestone not found".to_string()))
        }

        fn list_pending_releases(&self) -> Result<Vec<PendingRelease>> {
            Ok(self
                .milestones
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.status == MilestoneStatus::ReleaseRequested)
                .map(|m| PendingRelease {
                    milestone_id: m.id.clone(),
                    user_id: m.user_id.clone(),
                    milestone_name: m.name.clone(),
                    amount: m.amount,
                    requested_at: m.requested_at,
                    documents: m.documents.clone(),
                })
                .collect())
        }

        async fn seed_schedule(
            &self,
            user_id: &str,
            schedule: Vec<NewMilestone>,
        ) -> Result<Vec<Milestone>> {
            let mut store = self.milestones.lock().unwrap();
            let seeded: Vec<Milestone> = schedule
                .into_iter()
                .map(|m| Milestone {
                    id: format!("{}-m{}", user_id, m.position),
                    user_id: user_id.to_string(),
                    name: m.name,
                    amount: m.amount,
                    status: if m.position == 0 {
                        MilestoneStatus::Ready
                    } else {
                        MilestoneStatus::Locked
                    },
                    position: m.position,
                    documents: vec![],
                    requested_at: None,
                    completed_at: None,
                })
                .collect();
            store.extend(seeded.clone());
            Ok(seeded)
        }

        async fn transition_status(
            &self,
            milestone_id: &str,
            from: MilestoneStatus,
            to: MilestoneStatus,
            at: DateTime<Utc>,
        ) -> Result<usize> {
            let mut store = self.milestones.lock().unwrap();
            let Some(m) = store
                .iter_mut()
                .find(|m| m.id == milestone_id && m.status == from)
            else {
                return Ok(0);
            };
            m.status = to;
            match to {
                MilestoneStatus::ReleaseRequested => m.requested_at = Some(at),
                MilestoneStatus::Completed => m.completed_at = Some(at),
                _ => {}
            }
            Ok(1)
        }

        async fn request_release(
            &self,
            milestone_id: &str,
            documents: Vec<ReleaseDocument>,
            at: DateTime<Utc>,
        ) -> Result<usize> {
            let mut store = self.milestones.lock().unwrap();
            let Some(m) = store
                .iter_mut()
                .find(|m| m.id == milestone_id && m.status == MilestoneStatus::Ready)
            else {
                return Ok(0);
            };
            m.status = MilestoneStatus::ReleaseRequested;
            m.requested_at = Some(at);
            m.documents = documents;
            Ok(1)
        }

        async fn complete_release(
            &self,
            milestone_id: &str,
            release: NewTransaction,
            at: DateTime<Utc>,
        ) -> Result<usize> {
            let mut store = self.milestones.lock().unwrap();
            let Some(m) = store
                .iter_mut()
                .find(|m| m.id == milestone_id && m.status == MilestoneStatus::ReleaseRequested)
            else {
                return Ok(0);
            };
            m.status = MilestoneStatus::Completed;
            m.completed_at = Some(at);
            self.released.lock().unwrap().push(release);
            Ok(1)
        }
    }

    fn milestone(id: &str, position: i32, status: MilestoneStatus, amount: Decimal) -> Milestone {
        Milestone {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: format!("Milestone {}", id),
            amount,
            status,
            position,
            documents: vec![],
            requested_at: None,
            completed_at: None,
        }
    }

    fn service_with(
        milestones: Vec<Milestone>,
    ) -> (EscrowService, Arc<MockEscrowRepository>) {
        let repo = MockEscrowRepository::with_milestones(milestones);
        (EscrowService::new(repo.clone()), repo)
    }

    fn doc(name: &str) -> ReleaseDocument {
        ReleaseDocument {
            name: name.to_string(),
            url: format!("https://docs.example/{}", name),
        }
    }

    #[tokio::test]
    async fn request_release_moves_ready_to_requested_with_documents() {
        let (service, repo) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::Ready,
            dec!(750_000),
        )]);

        let updated = service
            .request_release("u1", "m1", vec![doc("invoice.pdf"), doc("photo.jpg")])
            .await
            .unwrap();

        assert_eq!(updated.status, MilestoneStatus::ReleaseRequested);
        assert_eq!(updated.documents.len(), 2);
        assert!(updated.requested_at.is_some());
        assert_eq!(repo.list_pending_releases().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn request_release_allows_zero_documents() {
        let (service, _) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::Ready,
            dec!(250_000),
        )]);

        let updated = service.request_release("u1", "m1", vec![]).await.unwrap();
        assert_eq!(updated.status, MilestoneStatus::ReleaseRequested);
    }

    #[tokio::test]
    async fn request_release_from_locked_or_requested_is_a_state_conflict() {
        let (service, repo) = service_with(vec![
            milestone("locked", 1, MilestoneStatus::Locked, dec!(400_000)),
            milestone("pending", 0, MilestoneStatus::ReleaseRequested, dec!(250_000)),
        ]);

        assert!(matches!(
            service.request_release("u1", "locked", vec![doc("late.pdf")]).await,
            Err(Error::StateConflict(_))
        ));
        assert!(matches!(
            service.request_release("u1", "pending", vec![]).await,
            Err(Error::StateConflict(_))
        ));
        // A conflicting request attaches nothing.
        assert!(repo.get_milestone("locked").unwrap().documents.is_empty());
    }

    #[tokio::test]
    async fn request_release_checks_ownership() {
        let (service, _) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::Ready,
            dec!(250_000),
        )]);

        assert!(matches!(
            service.request_release("intruder", "m1", vec![]).await,
            Err(Error::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn approve_emits_release_and_completes_terminally() {
        let (service, repo) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::ReleaseRequested,
            dec!(750_000),
        )]);

        let approved = service.approve_release("m1").await.unwrap();
        assert_eq!(approved.status, MilestoneStatus::Completed);
        assert!(approved.completed_at.is_some());

        let released = repo.released();
        assert_eq!(released.len(), 1);
        assert_eq!(released[0].amount, dec!(750_000));
        assert_eq!(released[0].description, "Milestone m1");
        assert_eq!(
            released[0].transaction_type,
            crate::transactions::TransactionType::Release
        );

        // Completed is terminal: a second approval conflicts and emits nothing.
        assert!(matches!(
            service.approve_release("m1").await,
            Err(Error::StateConflict(_))
        ));
        assert_eq!(repo.released().len(), 1);
    }

    #[tokio::test]
    async fn deny_returns_to_ready_without_a_ledger_entry() {
        let (service, repo) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::ReleaseRequested,
            dec!(250_000),
        )]);

        let denied = service.deny_release("m1").await.unwrap();
        assert_eq!(denied.status, MilestoneStatus::Ready);
        assert!(repo.released().is_empty());

        // Eligible for a fresh request after denial.
        let requested = service
            .request_release("u1", "m1", vec![doc("retry.pdf")])
            .await
            .unwrap();
        assert_eq!(requested.status, MilestoneStatus::ReleaseRequested);
    }

    #[tokio::test]
    async fn approving_from_ready_is_a_state_conflict() {
        let (service, repo) = service_with(vec![milestone(
            "m1",
            0,
            MilestoneStatus::Ready,
            dec!(250_000),
        )]);

        assert!(matches!(
            service.approve_release("m1").await,
            Err(Error::StateConflict(_))
        ));
        assert!(repo.released().is_empty());
    }

    #[tokio::test]
    async fn approval_unlocks_the_next_milestone_in_sequence() {
        let (service, repo) = service_with(vec![
            milestone("m1", 0, MilestoneStatus::ReleaseRequested, dec!(250_000)),
            milestone("m2", 1, MilestoneStatus::Locked, dec!(500_000)),
            milestone("m3", 2, MilestoneStatus::Locked, dec!(750_000)),
        ]);

        service.approve_release("m1").await.unwrap();

        let milestones = repo.load_milestones("u1").unwrap();
        assert_eq!(milestones[0].status, MilestoneStatus::Completed);
        assert_eq!(milestones[1].status, MilestoneStatus::Ready);
        // Only the immediate successor unlocks.
        assert_eq!(milestones[2].status, MilestoneStatus::Locked);
    }

    #[tokio::test]
    async fn seeded_schedule_starts_with_first_milestone_ready() {
        let (service, _) = service_with(vec![]);

        let seeded = service.seed_default_schedule("u1").await.unwrap();
        assert_eq!(seeded.len(), 4);
        assert_eq!(seeded[0].status, MilestoneStatus::Ready);
        assert!(seeded[1..]
            .iter()
            .all(|m| m.status == MilestoneStatus::Locked));
        assert_eq!(seeded[0].name, "Land Title Verification");
        assert_eq!(seeded[0].amount, dec!(250_000));
    }
}
