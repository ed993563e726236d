//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use buntubuild_core::goals::Goal;

use crate::utils::parse_decimal_tolerant;

/// Database model for a goal row. `position` keeps insertion order; it is
/// storage-internal and never leaves this crate.
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
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub position: i32,
}

/// Database model for inserting a goal row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub amount: String,
    pub position: i32,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            amount: parse_decimal_tolerant(&db.amount, "amount"),
            id: db.id,
            name: db.name,
        }
    }
}
