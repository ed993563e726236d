//! Escrow module - milestone-based fund releases.
//!
//! Each profile carries an ordered milestone schedule. Milestones unlock
//! sequentially, the user requests a release with verification documents,
//! and an admin approves (emitting a RELEASE ledger entry) or denies.

mod escrow_model;
mod escrow_service;
mod escrow_traits;

#[cfg(test)]
mod escrow_service_tests;

pub use escrow_model::{
    Milestone, MilestoneStatus, NewMilestone, PendingRelease, ReleaseDocument,
};
pub use escrow_service::EscrowService;
pub use escrow_traits::{EscrowRepositoryTrait, EscrowServiceTrait};
