//! SQLite storage implementation for user profiles.

mod model;
mod repository;

pub use model::{NewUserDB, UserDB};
pub use repository::ProfileRepository;
