//! Database models for ledger entries.

use std::str::FromStr;

use diesel::prelude::*;
use log::error;
use serde::{Deserialize, Serialize};

use buntubuild_core::transactions::{Transaction, TransactionType};

use crate::utils::{parse_date_tolerant, parse_datetime_tolerant, parse_decimal_tolerant};

/// Database model for a ledger row. `seq` is a storage-internal monotonic
/// counter preserving insertion order across users.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub transaction_type: String,
    pub description: String,
    pub amount: String,
    pub transaction_date: String,
    pub seq: i64,
    pub created_at: String,
}

/// Database model for appending a ledger row.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDB {
    pub id: String,
    pub user_id: String,
    pub transaction_type: String,
    pub description: String,
    pub amount: String,
    pub transaction_date: String,
    pub seq: i64,
    pub created_at: String,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        let transaction_type =
            TransactionType::from_str(&db.transaction_type).unwrap_or_else(|e| {
                error!(
                    "Unknown transaction type '{}' on row {}: {}",
                    db.transaction_type, db.id, e
                );
                TransactionType::Deposit
            });
        Self {
            transaction_type,
            amount: parse_decimal_tolerant(&db.amount, "amount"),
            date: parse_date_tolerant(&db.transaction_date, "transaction_date"),
            created_at: parse_datetime_tolerant(&db.created_at, "created_at"),
            id: db.id,
            user_id: db.user_id,
            description: db.description,
        }
    }
}
