//! Core data models for Teller
//!
//! Accounts, customers, and the money and id types they are built from.

pub mod account;
pub mod customer;
pub mod ids;
pub mod money;

pub use account::Account;
pub use customer::Customer;
pub use ids::{AccountId, CustomerId};
pub use money::{Money, MoneyParseError};
