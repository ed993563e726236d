//! SQLite storage implementation for roles.

mod model;
mod repository;

pub use model::RoleDB;
pub use repository::RoleRepository;
