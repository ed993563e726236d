use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

/// Service managing the append-only transaction ledger.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repository.list(user_id)
    }

    fn get_all_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.list_all()
    }

    async fn record(&self, user_id: &str, transaction: NewTransaction) -> Result<Transaction> {
        transaction.validate()?;

        let balance_delta = if transaction.transaction_type.is_balance_affecting() {
            transaction.amount
        } else {
            Decimal::ZERO
        };

        debug!(
            "Recording {} of {} for user {}",
            transaction.transaction_type, transaction.amount, user_id
        );
        self.transaction_repository
            .append(user_id, transaction, balance_delta)
            .await
    }

    fn replay_balance(&self, user_id: &str) -> Result<Decimal> {
        let transactions = self.transaction_repository.list(user_id)?;
        Ok(transactions
            .iter()
            .filter(|t| t.transaction_type.is_balance_affecting())
            .map(|t| t.amount)
            .sum())
    }
}
