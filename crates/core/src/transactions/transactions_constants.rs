/// Transaction types
///
/// Each constant is the storage value for one ledger entry category.
/// Incoming funds deposited into the escrow account. Increases the savings
/// balance.
pub const TRANSACTION_TYPE_DEPOSIT: &str = "DEPOSIT";

/// A monthly or top-up contribution toward the savings goal. Increases the
/// savings balance.
pub const TRANSACTION_TYPE_CONTRIBUTION: &str = "CONTRIBUTION";

/// Funds released against an approved milestone. Stored positive; rendered
/// negative in ledger views. Does not touch the savings balance.
pub const TRANSACTION_TYPE_RELEASE: &str = "RELEASE";

/// Types whose amounts fold into the current-savings balance.
pub const BALANCE_AFFECTING_TYPES: [&str; 2] =
    [TRANSACTION_TYPE_DEPOSIT, TRANSACTION_TYPE_CONTRIBUTION];
