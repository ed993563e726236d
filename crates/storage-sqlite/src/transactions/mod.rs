//! SQLite storage implementation for the transaction ledger.

mod model;
mod repository;

pub use model::{NewTransactionDB, TransactionDB};
pub(crate) use repository::append_entry;
pub use repository::TransactionRepository;
