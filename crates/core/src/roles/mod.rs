//! Roles module - named permission bundles for the admin console.
//!
//! Two built-in roles (`admin`, `user`) are seeded at startup and cannot be
//! renamed or, for `admin`, edited at all. Custom roles carry any subset of
//! the known permission strings.

mod roles_model;
mod roles_service;
mod roles_traits;


pub use roles_model::{
    NewRole, Role, RoleUpdate, ADMIN_ROLE_ID, ALL_PERMISSIONS, DEFAULT_USER_PERMISSIONS,
    USER_ROLE_ID,
};
pub use roles_service::RoleService;
pub use roles_traits::{RoleRepositoryTrait, RoleServiceTrait};
