use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use uuid::Uuid;

use buntubuild_core::errors::{DatabaseError, Error};
use buntubuild_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};
use buntubuild_core::Result;

use super::model::{NewTransactionDB, TransactionDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{transactions, users};
use crate::utils::{format_date, format_datetime, parse_decimal_tolerant};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TransactionRepository { pool, writer }
    }
}

/// Appends a ledger row and applies `balance_delta` to the owning profile.
/// Must run inside a writer job; also used by the escrow repository so a
/// release completion and its ledger entry share one transaction.
pub(crate) fn append_entry(
    conn: &mut SqliteConnection,
    owner: &str,
    transaction: NewTransaction,
    balance_delta: Decimal,
) -> Result<Transaction> {
    let next_seq: i64 = transactions::table
        .select(diesel::dsl::max(transactions::seq))
        .first::<Option<i64>>(conn)
        .map_err(StorageError::from)?
        .map_or(1, |s| s + 1);

    let new_row = NewTransactionDB {
        id: transaction
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        user_id: owner.to_string(),
        transaction_type: transaction.transaction_type.to_string(),
        description: transaction.description,
        amount: transaction.amount.to_string(),
        transaction_date: format_date(transaction.date),
        seq: next_seq,
        created_at: format_datetime(Utc::now()),
    };
    let result_db = diesel::insert_into(transactions::table)
        .values(&new_row)
        .returning(TransactionDB::as_returning())
        .get_result(conn)
        .map_err(StorageError::from)?;

    if !balance_delta.is_zero() {
        let stored: String = users::table
            .find(owner)
            .select(users::current_savings)
            .first(conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "User {} not found",
                    owner
                )))
            })?;
        let balance = parse_decimal_tolerant(&stored, "current_savings");
        diesel::update(users::table.find(owner))
            .set((
                users::current_savings.eq((balance + balance_delta).to_string()),
                users::updated_at.eq(format_datetime(Utc::now())),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;
    }

    Ok(Transaction::from(result_db))
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::seq.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .order(transactions::seq.asc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Appends the row and applies the balance delta to the owning profile in
    /// one writer transaction; a failure on either side rolls back both.
    async fn append(
        &self,
        user_id: &str,
        transaction: NewTransaction,
        balance_delta: Decimal,
    ) -> Result<Transaction> {
        let owner = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Transaction> {
                append_entry(conn, &owner, transaction, balance_delta)
            })
            .await
    }
}
