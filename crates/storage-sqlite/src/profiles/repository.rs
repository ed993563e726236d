use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use buntubuild_core::constants::DEFAULT_CURRENCY;
use buntubuild_core::errors::{DatabaseError, Error};
use buntubuild_core::profiles::{
    default_plan_seed, NewUserProfile, ProfileRepositoryTrait, UserCredentials, UserProfile,
    UserSummary,
};
use buntubuild_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::utils::{format_date, format_datetime};

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }

    fn find_user_db(&self, user_id: &str) -> Result<Option<UserDB>> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(|e| StorageError::from(e).into())
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.find_profile(user_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!("User {} not found", user_id)))
        })
    }

    fn find_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        Ok(self.find_user_db(user_id)?.map(UserProfile::from))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users::table
            .filter(users::email.eq(email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(UserCredentials::from))
    }

    fn list_users(&self) -> Result<Vec<UserSummary>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = users::table
            .order(users::created_at.asc())
            .load::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(UserSummary::from).collect())
    }

    async fn insert_profile(&self, new_profile: NewUserProfile) -> Result<UserProfile> {
        let now = Utc::now();
        let (savings, contribution, target) = default_plan_seed(now.date_naive());
        let new_user_db = NewUserDB {
            id: new_profile
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            email: new_profile.email,
            display_name: new_profile.display_name,
            password_hash: new_profile.password_hash,
            currency: DEFAULT_CURRENCY.to_string(),
            current_savings: savings.to_string(),
            monthly_contribution: contribution.to_string(),
            target_date: target.map(format_date),
            is_admin: new_profile.is_admin,
            disabled: false,
            created_at: format_datetime(now),
            updated_at: format_datetime(now),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(result_db))
            })
            .await
    }

    async fn update_plan(
        &self,
        user_id: &str,
        monthly_contribution: Decimal,
        target_date: Option<NaiveDate>,
    ) -> Result<UserProfile> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let result_db = diesel::update(users::table.find(&user_id))
                    .set((
                        users::monthly_contribution.eq(monthly_contribution.to_string()),
                        users::target_date.eq(target_date.map(format_date)),
                        users::updated_at.eq(format_datetime(Utc::now())),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(result_db))
            })
            .await
    }

    async fn set_currency(
        &self,
        user_id: &str,
        currency: buntubuild_core::currency::Currency,
    ) -> Result<UserProfile> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProfile> {
                let result_db = diesel::update(users::table.find(&user_id))
                    .set((
                        users::currency.eq(currency.code().to_string()),
                        users::updated_at.eq(format_datetime(Utc::now())),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(result_db))
            })
            .await
    }

    async fn set_disabled(&self, user_id: &str, disabled: bool) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let updated = diesel::update(users::table.find(&user_id))
                    .set((
                        users::disabled.eq(disabled),
                        users::updated_at.eq(format_datetime(Utc::now())),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if updated == 0 {
                    return Err(Error::Database(DatabaseError::NotFound(format!(
                        "User {} not found",
                        user_id
                    ))));
                }
                Ok(())
            })
            .await
    }
}
