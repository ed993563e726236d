#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::transactions::transactions_model::{NewTransaction, Transaction, TransactionType};
    use crate::transactions::{
        TransactionRepositoryTrait, TransactionService, TransactionServiceTrait,
    };
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock TransactionRepository ---
    //
    // Tracks the profile balance alongside the ledger so the atomic
    // follow-up-write contract can be asserted.
    struct MockTransactionRepository {
        entries: Arc<Mutex<Vec<Transaction>>>,
        balance: Arc<Mutex<Decimal>>,
    }

    impl MockTransactionRepository {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                entries: Arc::new(Mutex::new(Vec::new())),
                balance: Arc::new(Mutex::new(Decimal::ZERO)),
            })
        }

        fn balance(&self) -> Decimal {
            *self.balance.lock().unwrap()
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn list(&self, user_id: &str) -> Result<Vec<Transaction>> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.user_id == user_id)
                .cloned()
                .collect())
        }

        fn list_all(&self) -> Result<Vec<Transaction>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn append(
            &self,
            user_id: &str,
            transaction: NewTransaction,
            balance_delta: Decimal,
        ) -> Result<Transaction> {
            let mut entries = self.entries.lock().unwrap();
            let stored = Transaction {
                id: transaction
                    .id
                    .unwrap_or_else(|| format!("txn-{}", entries.len())),
                user_id: user_id.to_string(),
                transaction_type: transaction.transaction_type,
                description: transaction.description,
                amount: transaction.amount,
                date: transaction.date,
                created_at: Utc::now(),
            };
            entries.push(stored.clone());
            *self.balance.lock().unwrap() += balance_delta;
            Ok(stored)
        }
    }

    fn new_tx(t: TransactionType, amount: Decimal, description: &str) -> NewTransaction {
        NewTransaction {
            id: None,
            transaction_type: t,
            description: description.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn deposits_and_contributions_increment_balance() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        service
            .record("u1", new_tx(TransactionType::Deposit, dec!(50_000), "Top-up"))
            .await
            .unwrap();
        service
            .record(
                "u1",
                new_tx(
                    TransactionType::Contribution,
                    dec!(75_000),
                    "Monthly Contribution",
                ),
            )
            .await
            .unwrap();

        assert_eq!(repo.balance(), dec!(125_000));
    }

    #[tokio::test]
    async fn releases_never_touch_the_balance() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        service
            .record(
                "u1",
                new_tx(
                    TransactionType::Release,
                    dec!(250_000),
                    "Land Title Verification",
                ),
            )
            .await
            .unwrap();

        assert_eq!(repo.balance(), Decimal::ZERO);
        let entries = service.get_transactions("u1").unwrap();
        assert_eq!(entries.len(), 1);
        // Stored positive, displayed negative.
        assert_eq!(entries[0].amount, dec!(250_000));
        assert_eq!(entries[0].signed_display_amount(), dec!(-250_000));
    }

    #[tokio::test]
    async fn replay_balance_matches_persisted_balance() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        for tx in [
            new_tx(TransactionType::Deposit, dec!(1_185_000), "Initial Deposit"),
            new_tx(
                TransactionType::Contribution,
                dec!(75_000),
                "Monthly Contribution",
            ),
            new_tx(
                TransactionType::Release,
                dec!(500_000),
                "Foundation Materials",
            ),
        ] {
            service.record("u1", tx).await.unwrap();
        }

        assert_eq!(service.replay_balance("u1").unwrap(), dec!(1_260_000));
        assert_eq!(service.replay_balance("u1").unwrap(), repo.balance());
    }

    #[tokio::test]
    async fn record_is_deliberately_not_idempotent() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        let tx = new_tx(TransactionType::Deposit, dec!(10_000), "Top-up");
        service.record("u1", tx.clone()).await.unwrap();
        service.record("u1", tx).await.unwrap();

        assert_eq!(service.get_transactions("u1").unwrap().len(), 2);
        assert_eq!(repo.balance(), dec!(20_000));
    }

    #[tokio::test]
    async fn invalid_entries_are_rejected_before_any_write() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        let zero = new_tx(TransactionType::Deposit, dec!(0), "Nothing");
        assert!(matches!(
            service.record("u1", zero).await,
            Err(Error::Validation(_))
        ));

        let blank = new_tx(TransactionType::Deposit, dec!(1_000), "   ");
        assert!(matches!(
            service.record("u1", blank).await,
            Err(Error::Validation(_))
        ));

        assert!(service.get_transactions("u1").unwrap().is_empty());
        assert_eq!(repo.balance(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let repo = MockTransactionRepository::new();
        let service = TransactionService::new(repo.clone());

        // Entry dates run backwards; insertion order must win.
        for (i, day) in [28, 14, 7].iter().enumerate() {
            let mut tx = new_tx(
                TransactionType::Deposit,
                dec!(1_000),
                &format!("Deposit {}", i),
            );
            tx.date = NaiveDate::from_ymd_opt(2024, 6, *day).unwrap();
            service.record("u1", tx).await.unwrap();
        }

        let listed = service.get_transactions("u1").unwrap();
        let descriptions: Vec<_> = listed.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Deposit 0", "Deposit 1", "Deposit 2"]);
    }
}
