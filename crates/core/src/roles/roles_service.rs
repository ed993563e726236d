use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::errors::{DatabaseError, Error, Result};
use crate::roles::roles_model::{
    NewRole, Role, RoleUpdate, ADMIN_ROLE_ID, ALL_PERMISSIONS, DEFAULT_USER_PERMISSIONS,
    USER_ROLE_ID,
};
use crate::roles::roles_traits::{RoleRepositoryTrait, RoleServiceTrait};

/// Service managing named permission bundles.
pub struct RoleService {
    role_repository: Arc<dyn RoleRepositoryTrait>,
}

impl RoleService {
    pub fn new(role_repository: Arc<dyn RoleRepositoryTrait>) -> Self {
        Self { role_repository }
    }

    async fn seed_role(&self, id: &str, name: &str, description: &str, permissions: &[&str]) -> Result<()> {
        if self.role_repository.find_role(id)?.is_some() {
            return Ok(());
        }
        self.role_repository
            .insert_role(NewRole {
                id: Some(id.to_string()),
                name: name.to_string(),
                description: description.to_string(),
                permissions: permissions.iter().map(|p| (*p).to_string()).collect(),
            })
            .await?;
        info!("Seeded built-in role '{}'", id);
        Ok(())
    }
}

#[async_trait]
impl RoleServiceTrait for RoleService {
    fn get_roles(&self) -> Result<Vec<Role>> {
        self.role_repository.load_roles()
    }

    async fn seed_builtin_roles(&self) -> Result<()> {
        self.seed_role(
            ADMIN_ROLE_ID,
            "Admin",
            "Full access to every console area",
            &ALL_PERMISSIONS,
        )
        .await?;
        self.seed_role(
            USER_ROLE_ID,
            "User",
            "Standard savings account access",
            &DEFAULT_USER_PERMISSIONS,
        )
        .await
    }

    async fn create_role(&self, new_role: NewRole) -> Result<Role> {
        new_role.validate()?;
        // Names identify roles in the console, so they stay unique. The
        // schema backstops this check with a UNIQUE constraint.
        if self
            .role_repository
            .load_roles()?
            .iter()
            .any(|r| r.name == new_role.name)
        {
            return Err(Error::ConstraintViolation(format!(
                "Role name '{}' is already in use",
                new_role.name
            )));
        }
        self.role_repository.insert_role(new_role).await
    }

    async fn update_role(&self, update: RoleUpdate) -> Result<Role> {
        update.validate()?;
        if update.id == ADMIN_ROLE_ID {
            return Err(Error::ConstraintViolation(
                "The admin role is fixed and cannot be edited".to_string(),
            ));
        }
        if self.role_repository.find_role(&update.id)?.is_none() {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "role {}",
                update.id
            ))));
        }
        self.role_repository.update_role(update).await
    }

    async fn remove_role(&self, role_id: &str) -> Result<()> {
        if role_id == ADMIN_ROLE_ID || role_id == USER_ROLE_ID {
            return Err(Error::ConstraintViolation(
                "Built-in roles cannot be removed".to_string(),
            ));
        }
        let deleted = self.role_repository.delete_role(role_id).await?;
        if deleted == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "role {}",
                role_id
            ))));
        }
        Ok(())
    }
}
