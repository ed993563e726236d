//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::transactions::transactions_constants::*;

/// Ledger entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Contribution,
    Release,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => TRANSACTION_TYPE_DEPOSIT,
            TransactionType::Contribution => TRANSACTION_TYPE_CONTRIBUTION,
            TransactionType::Release => TRANSACTION_TYPE_RELEASE,
        }
    }

    /// Whether entries of this type fold into the current-savings balance.
    pub fn is_balance_affecting(&self) -> bool {
        BALANCE_AFFECTING_TYPES.contains(&self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            TRANSACTION_TYPE_DEPOSIT => Ok(TransactionType::Deposit),
            TRANSACTION_TYPE_CONTRIBUTION => Ok(TransactionType::Contribution),
            TRANSACTION_TYPE_RELEASE => Ok(TransactionType::Release),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            ))
            .into()),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger entry. Amounts are stored positive; the type disambiguates
/// direction, and [`Transaction::signed_display_amount`] gives the signed
/// figure ledger views render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Negative for releases, positive otherwise.
    pub fn signed_display_amount(&self) -> Decimal {
        match self.transaction_type {
            TransactionType::Release => -self.amount,
            _ => self.amount,
        }
    }
}

/// Input model for appending a ledger entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Transaction amount must be greater than zero, got {}",
                self.amount
            ))
            .into());
        }
        Ok(())
    }
}
