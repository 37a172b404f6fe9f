//! Teller - single-process banking ledger
//!
//! This library provides the core of the Teller console application: customer
//! accounts with deposit and withdrawal rules, an in-memory account
//! repository, and account statements.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Command-line settings and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, customers, money)
//! - `storage`: In-memory account repository
//! - `services`: Use cases (account creation, transactions, statements)
//! - `display`: Statement formatting
//! - `cli`: Interactive console session
//!
//! # Example
//!
//! ```rust
//! use teller::models::Money;
//! use teller::services::{CreateAccount, GenerateAccountStatement, TransactionService};
//! use teller::storage::AccountRepository;
//!
//! let repository = AccountRepository::new();
//! let account = CreateAccount::new(&repository)
//!     .create_account("C1", "Ada", "ada@example.com", "555-0100")?;
//! TransactionService::new(&repository).deposit(account.id, Money::from_cents(10000))?;
//!
//! let statement = GenerateAccountStatement::new(&repository)
//!     .generate_account_statement(account.id)?;
//! assert!(statement.contains("- Deposited: 100.0"));
//! # Ok::<(), teller::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
