//! Planning module - the contribution solver.
//!
//! Pure derivations over the savings plan: months remaining to the target
//! build date, projected savings, on-track status, and the required monthly
//! contribution back-solve. Nothing here touches storage; persisting a chosen
//! contribution figure is the profile service's job.

mod planning_model;

#[cfg(test)]
mod planning_tests;

pub use planning_model::{
    months_remaining, required_monthly_contribution, PlanProjection, SavingsPlan,
};
