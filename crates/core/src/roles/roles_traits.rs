use async_trait::async_trait;

use crate::errors::Result;
use crate::roles::roles_model::{NewRole, Role, RoleUpdate};

/// Trait for role repository operations.
#[async_trait]
pub trait RoleRepositoryTrait: Send + Sync {
    fn load_roles(&self) -> Result<Vec<Role>>;
    fn find_role(&self, role_id: &str) -> Result<Option<Role>>;
    async fn insert_role(&self, new_role: NewRole) -> Result<Role>;
    async fn update_role(&self, update: RoleUpdate) -> Result<Role>;
    async fn delete_role(&self, role_id: &str) -> Result<usize>;
}

/// Trait for role service operations. All of these back admin console
/// screens; the HTTP layer guards the routes.
#[async_trait]
pub trait RoleServiceTrait: Send + Sync {
    fn get_roles(&self) -> Result<Vec<Role>>;
    /// Inserts the built-in `admin` and `user` roles when missing. Safe to
    /// call on every startup.
    async fn seed_builtin_roles(&self) -> Result<()>;
    async fn create_role(&self, new_role: NewRole) -> Result<Role>;
    /// Edits description and permissions. The `admin` role is fixed and any
    /// attempt to edit it is a `ConstraintViolation`.
    async fn update_role(&self, update: RoleUpdate) -> Result<Role>;
    /// Built-in roles cannot be removed.
    async fn remove_role(&self, role_id: &str) -> Result<()>;
}
