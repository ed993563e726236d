use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction};

/// Trait for transaction repository operations.
///
/// The ledger is append-only; rows are returned in insertion order (not
/// sorted by the entry's own `date` field — callers sort if they need a
/// chronological view).
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list(&self, user_id: &str) -> Result<Vec<Transaction>>;
    fn list_all(&self) -> Result<Vec<Transaction>>;
    /// Appends the entry and applies `balance_delta` to the owning profile's
    /// current savings in the same storage transaction.
    async fn append(
        &self,
        user_id: &str,
        transaction: NewTransaction,
        balance_delta: Decimal,
    ) -> Result<Transaction>;
}

/// Trait for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
    /// Admin console view across all users.
    fn get_all_transactions(&self) -> Result<Vec<Transaction>>;
    /// Appends a ledger entry. Deposits and contributions increment the
    /// profile's current savings as an atomic follow-up write.
    ///
    /// NOT idempotent: recording identical content twice produces two entries
    /// and double-counts the balance. Callers must not retry blindly.
    async fn record(&self, user_id: &str, transaction: NewTransaction) -> Result<Transaction>;
    /// Folds the balance-affecting entries from zero; used to cross-check the
    /// persisted profile balance.
    fn replay_balance(&self, user_id: &str) -> Result<Decimal>;
}
