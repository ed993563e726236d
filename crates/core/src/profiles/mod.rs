//! Profiles module - per-user savings profile and account records.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

#[cfg(test)]
mod profiles_service_tests;

pub use profiles_model::{NewUserProfile, PlanUpdate, UserCredentials, UserProfile, UserSummary};
pub use profiles_service::{default_plan_seed, ProfileService};
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
