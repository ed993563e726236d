//! Role domain models and the permission catalog.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

pub const ADMIN_ROLE_ID: &str = "admin";
pub const USER_ROLE_ID: &str = "user";

/// Every permission the application knows about. Roles may only reference
/// entries from this catalog.
pub const ALL_PERMISSIONS: [&str; 9] = [
    "View Dashboard",
    "Manage Users",
    "View Transactions",
    "Approve Releases",
    "Manage Roles",
    "Access Settings",
    "Manage Own Savings",
    "Request Fund Releases",
    "View Own Transactions",
];

/// Permissions granted to the built-in `user` role.
pub const DEFAULT_USER_PERMISSIONS: [&str; 4] = [
    "View Dashboard",
    "Manage Own Savings",
    "Request Fund Releases",
    "View Own Transactions",
];

/// A named bundle of permissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    /// Immutable after creation.
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl Role {
    pub fn is_builtin(&self) -> bool {
        self.id == ADMIN_ROLE_ID || self.id == USER_ROLE_ID
    }
}

/// Input model for creating a role.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl NewRole {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        validate_permissions(&self.permissions)
    }
}

/// Update model: description and permissions only, names are immutable.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub id: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl RoleUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_permissions(&self.permissions)
    }
}

fn validate_permissions(permissions: &[String]) -> Result<()> {
    for permission in permissions {
        if !ALL_PERMISSIONS.contains(&permission.as_str()) {
            return Err(ValidationError::InvalidInput(format!(
                "Unknown permission '{}'",
                permission
            ))
            .into());
        }
    }
    Ok(())
}
