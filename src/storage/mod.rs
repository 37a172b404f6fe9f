//! Storage layer for Teller
//!
//! Accounts live in memory for the lifetime of the process; nothing is
//! written to disk.

pub mod accounts;

pub use accounts::AccountRepository;
