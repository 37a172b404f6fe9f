//! Custom error types for Teller
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! The display strings of the domain variants are printed verbatim by the
//! console menus.

use thiserror::Error;

/// Which balance mutation rejected an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountOperation {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for AmountOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountOperation::Deposit => write!(f, "Deposit"),
            AmountOperation::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// The main error type for Teller operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-positive deposit or withdrawal amount
    #[error("{operation} amount must be positive.")]
    InvalidAmount { operation: AmountOperation },

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds.")]
    InsufficientFunds,

    /// Lookup by an id that was never saved
    #[error("Account not found.")]
    AccountNotFound { identifier: String },

    /// Result of a mutation does not fit the amount representation
    #[error("Amount out of range.")]
    AmountOutOfRange,

    /// Console input that could not be interpreted
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Repository lock errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create an "account not found" error
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::AccountNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create an "invalid amount" error for deposits
    pub fn invalid_deposit() -> Self {
        Self::InvalidAmount {
            operation: AmountOperation::Deposit,
        }
    }

    /// Create an "invalid amount" error for withdrawals
    pub fn invalid_withdrawal() -> Self {
        Self::InvalidAmount {
            operation: AmountOperation::Withdrawal,
        }
    }

    /// Create an error for console input that failed to parse
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Check if this error comes from the account's balance rules
    ///
    /// Domain errors are reported to the user and the session continues;
    /// anything else ends the session.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::InsufficientFunds
                | Self::AccountNotFound { .. }
                | Self::AmountOutOfRange
                | Self::InvalidInput { .. }
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Teller operations
pub type LedgerResult<T> = Result<T, LedgerError>;
