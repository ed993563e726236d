use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use buntubuild_core::errors::{DatabaseError, Error};
use buntubuild_core::roles::{NewRole, Role, RoleRepositoryTrait, RoleUpdate};
use buntubuild_core::Result;

use super::model::RoleDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::roles;

pub struct RoleRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RoleRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RoleRepository { pool, writer }
    }
}

#[async_trait]
impl RoleRepositoryTrait for RoleRepository {
    fn load_roles(&self) -> Result<Vec<Role>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = roles::table
            .order(roles::name.asc())
            .load::<RoleDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Role::from).collect())
    }

    fn find_role(&self, role_id: &str) -> Result<Option<Role>> {
        let mut conn = get_connection(&self.pool)?;
        let row = roles::table
            .find(role_id)
            .first::<RoleDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Role::from))
    }

    async fn insert_role(&self, new_role: NewRole) -> Result<Role> {
        let permissions = serde_json::to_string(&new_role.permissions)
            .map_err(|e| Error::from(StorageError::SerializationError(e.to_string())))?;
        let row = RoleDB {
            id: new_role.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_role.name,
            description: new_role.description,
            permissions,
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Role> {
                let result_db = diesel::insert_into(roles::table)
                    .values(&row)
                    .returning(RoleDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Role::from(result_db))
            })
            .await
    }

    async fn update_role(&self, update: RoleUpdate) -> Result<Role> {
        let permissions = serde_json::to_string(&update.permissions)
            .map_err(|e| Error::from(StorageError::SerializationError(e.to_string())))?;
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Role> {
                let updated = diesel::update(roles::table.find(&update.id))
                    .set((
                        roles::description.eq(&update.description),
                        roles::permissions.eq(&permissions),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "Role {} not found",
                        update.id
                    ))));
                }
                let result_db = roles::table
                    .find(&update.id)
                    .first::<RoleDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Role::from(result_db))
            })
            .await
    }

    async fn delete_role(&self, role_id: &str) -> Result<usize> {
        let role_id = role_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(roles::table.find(&role_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
