//! Database models for user profiles.

use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use buntubuild_core::currency::Currency;
use buntubuild_core::profiles::{UserCredentials, UserProfile, UserSummary};

use crate::utils::{
    parse_date_tolerant, parse_datetime_tolerant, parse_decimal_tolerant,
};

/// Database model for a user row. Holds both the credential fields consumed
/// at sign-in and the savings-profile fields.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub currency: String,
    pub current_savings: String,
    pub monthly_contribution: String,
    pub target_date: Option<String>,
    pub is_admin: bool,
    pub disabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for inserting a user row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDB {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub currency: String,
    pub current_savings: String,
    pub monthly_contribution: String,
    pub target_date: Option<String>,
    pub is_admin: bool,
    pub disabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserDB> for UserProfile {
    fn from(db: UserDB) -> Self {
        Self {
            currency: Currency::from_str(&db.currency).unwrap_or_default(),
            current_savings: parse_decimal_tolerant(&db.current_savings, "current_savings"),
            monthly_contribution: parse_decimal_tolerant(
                &db.monthly_contribution,
                "monthly_contribution",
            ),
            target_date: db
                .target_date
                .as_deref()
                .map(|d| parse_date_tolerant(d, "target_date")),
            created_at: parse_datetime_tolerant(&db.created_at, "created_at"),
            updated_at: parse_datetime_tolerant(&db.updated_at, "updated_at"),
            user_id: db.id,
            email: db.email,
            display_name: db.display_name,
            is_admin: db.is_admin,
            disabled: db.disabled,
        }
    }
}

impl From<UserDB> for UserCredentials {
    fn from(db: UserDB) -> Self {
        Self {
            user_id: db.id,
            email: db.email,
            password_hash: db.password_hash,
            is_admin: db.is_admin,
            disabled: db.disabled,
        }
    }
}

impl From<UserDB> for UserSummary {
    fn from(db: UserDB) -> Self {
        Self {
            created_at: parse_datetime_tolerant(&db.created_at, "created_at"),
            user_id: db.id,
            email: db.email,
            display_name: db.display_name,
            is_admin: db.is_admin,
            disabled: db.disabled,
        }
    }
}
