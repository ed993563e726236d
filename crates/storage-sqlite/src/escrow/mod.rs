//! SQLite storage implementation for escrow milestones.

mod model;
mod repository;

pub use model::{MilestoneDB, MilestoneDocumentDB, NewMilestoneDB, NewMilestoneDocumentDB};
pub use repository::EscrowRepository;
