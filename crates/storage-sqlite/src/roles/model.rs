//! Database models for roles.
//!
//! Permissions are a JSON string array in a TEXT column; the catalog is
//! small and never queried by permission, so a join table buys nothing.

use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use buntubuild_core::roles::Role;

/// Database model for a role row.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::roles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RoleDB {
    pub id: String,
    pub name: String,
    pub description: String,
    pub permissions: String,
}

impl From<RoleDB> for Role {
    fn from(db: RoleDB) -> Self {
        let permissions = serde_json::from_str(&db.permissions).unwrap_or_else(|e| {
            error!("Malformed permissions on role {}: {}", db.id, e);
            Vec::new()
        });
        Self {
            id: db.id,
            name: db.name,
            description: db.description,
            permissions,
        }
    }
}

impl RoleDB {
    pub fn from_domain(role: &Role) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: role.id.clone(),
            name: role.name.clone(),
            description: role.description.clone(),
            permissions: serde_json::to_string(&role.permissions)?,
        })
    }
}
