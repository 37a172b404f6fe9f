//! Business logic layer for Teller
//!
//! Use cases borrow the account repository and never own it; the caller
//! decides its lifetime.

pub mod account;
pub mod statement;
pub mod transaction;

pub use account::CreateAccount;
pub use statement::{AccountStatement, GenerateAccountStatement};
pub use transaction::TransactionService;
