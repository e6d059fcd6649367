//! Error types for the bank ledger
//!
//! This module defines every error the account store and its persistence
//! backends can report. Errors carry enough context to be shown to a user
//! as-is by a front-end.
//!
//! # Error Categories
//!
//! - **Business Errors**: invalid amounts, insufficient balance, unknown accounts
//! - **Persistence Errors**: the data file cannot be read, written or parsed
//! - **Invariant Errors**: id collisions and id exhaustion, which indicate a bug
//!   or a corrupted data file rather than a user mistake

use super::account::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// Entity-level and store-level failures propagate unchanged to the caller;
/// nothing in the library retries or recovers locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A deposit, withdrawal or opening balance was not acceptable
    ///
    /// Deposits and withdrawals require a strictly positive amount.
    #[error("Invalid amount {amount} for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account is left unchanged.
    #[error(
        "Insufficient balance in account {account}: available {available}, requested {requested}"
    )]
    InsufficientBalance {
        /// Account id
        account: AccountId,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No account with this id exists in the store
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The id that was looked up
        account: AccountId,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account id
        account: AccountId,
    },

    /// Two accounts claimed the same id
    ///
    /// Raised when a loaded data file repeats an id, or when id allocation
    /// hands out an id that is already taken. Never a user error.
    #[error("Account id {account} is already in use")]
    IdCollision {
        /// The duplicated id
        account: AccountId,
    },

    /// Every representable account id has been handed out
    #[error("No account ids left to allocate")]
    AccountIdsExhausted,

    /// I/O error while reading or writing the data file
    #[error("I/O error{}: {message}", path.as_ref().map(|p| format!(" on {}", p)).unwrap_or_default())]
    IoError {
        /// File involved (if known)
        path: Option<String>,
        /// Description of the I/O error
        message: String,
    },

    /// The data file exists but its content is not a valid account list
    #[error("Malformed data in {path}: {message}")]
    ParseError {
        /// File that failed to parse
        path: String,
        /// Description of the problem
        message: String,
    },
}

/// Result alias used throughout the crate
pub type BankResult<T> = Result<T, BankError>;

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            path: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        BankError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(
        account: AccountId,
        available: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::InsufficientBalance {
            account,
            available,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an IdCollision error
    pub fn id_collision(account: AccountId) -> Self {
        BankError::IdCollision { account }
    }

    /// Create an IoError bound to a file path
    pub fn io(path: impl AsRef<std::path::Path>, error: impl std::fmt::Display) -> Self {
        BankError::IoError {
            path: Some(path.as_ref().display().to_string()),
            message: error.to_string(),
        }
    }

    /// Create a ParseError bound to a file path
    pub fn parse(path: impl AsRef<std::path::Path>, message: impl std::fmt::Display) -> Self {
        BankError::ParseError {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Whether this error comes from the storage layer rather than from an
    /// account operation
    pub fn is_persistence(&self) -> bool {
        matches!(self, BankError::IoError { .. } | BankError::ParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::invalid_amount(
        BankError::InvalidAmount { operation: "deposit".to_string(), amount: dec!(-5) },
        "Invalid amount -5 for deposit: amount must be positive"
    )]
    #[case::insufficient_balance(
        BankError::InsufficientBalance { account: 1, available: dec!(150.00), requested: dec!(200) },
        "Insufficient balance in account 1: available 150.00, requested 200"
    )]
    #[case::account_not_found(
        BankError::AccountNotFound { account: 42 },
        "Account 42 not found"
    )]
    #[case::arithmetic_overflow(
        BankError::ArithmeticOverflow { operation: "deposit".to_string(), account: 3 },
        "Arithmetic overflow in deposit for account 3"
    )]
    #[case::id_collision(
        BankError::IdCollision { account: 7 },
        "Account id 7 is already in use"
    )]
    #[case::ids_exhausted(BankError::AccountIdsExhausted, "No account ids left to allocate")]
    #[case::io_error_with_path(
        BankError::IoError { path: Some("accounts.json".to_string()), message: "Permission denied".to_string() },
        "I/O error on accounts.json: Permission denied"
    )]
    #[case::io_error_without_path(
        BankError::IoError { path: None, message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error(
        BankError::ParseError { path: "accounts.json".to_string(), message: "expected array".to_string() },
        "Malformed data in accounts.json: expected array"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        BankError::invalid_amount("withdrawal", dec!(0)),
        BankError::InvalidAmount { operation: "withdrawal".to_string(), amount: dec!(0) }
    )]
    #[case::insufficient_balance(
        BankError::insufficient_balance(1, dec!(10), dec!(20)),
        BankError::InsufficientBalance { account: 1, available: dec!(10), requested: dec!(20) }
    )]
    #[case::account_not_found(
        BankError::account_not_found(9),
        BankError::AccountNotFound { account: 9 }
    )]
    #[case::io(
        BankError::io("data/accounts.json", "disk full"),
        BankError::IoError { path: Some("data/accounts.json".to_string()), message: "disk full".to_string() }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { path: None, .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[rstest]
    #[case(BankError::io("a.json", "x"), true)]
    #[case(BankError::parse("a.json", "x"), true)]
    #[case(BankError::account_not_found(1), false)]
    #[case(BankError::id_collision(1), false)]
    fn test_is_persistence(#[case] error: BankError, #[case] expected: bool) {
        assert_eq!(error.is_persistence(), expected);
    }
}
