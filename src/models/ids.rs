//! Strongly-typed ID wrappers for ledger entities
//!
//! Accounts are numbered sequentially by the repository; customer ids are
//! whatever the user typed at the console.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Prefix of the display account number
const ACCOUNT_NUMBER_PREFIX: &str = "ACC";

/// Sequential numeric account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u32);

impl AccountId {
    /// Wrap a raw account number
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id after this one, or `None` once the id space is exhausted
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Derived display number: "ACC" followed by the id zero-padded to 5 digits
    pub fn account_number(&self) -> String {
        format!("{}{:05}", ACCOUNT_NUMBER_PREFIX, self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Customer identifier as entered by the user, unvalidated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_padding() {
        assert_eq!(AccountId::new(1).account_number(), "ACC00001");
        assert_eq!(AccountId::new(42).account_number(), "ACC00042");
        assert_eq!(AccountId::new(99999).account_number(), "ACC99999");
    }

    #[test]
    fn test_account_number_wider_than_padding() {
        assert_eq!(AccountId::new(123456).account_number(), "ACC123456");
    }

    #[test]
    fn test_account_id_parse() {
        assert_eq!(" 12 ".parse::<AccountId>().unwrap(), AccountId::new(12));
        assert!("abc".parse::<AccountId>().is_err());
        assert!("-1".parse::<AccountId>().is_err());
    }

    #[test]
    fn test_account_id_next() {
        assert_eq!(AccountId::new(1).next(), Some(AccountId::new(2)));
        assert_eq!(AccountId::new(u32::MAX).next(), None);
    }

    #[test]
    fn test_customer_id_keeps_raw_text() {
        let id = CustomerId::from(" cust 01 ");
        assert_eq!(id.as_str(), " cust 01 ");
        assert_eq!(id.to_string(), " cust 01 ");
    }

    #[test]
    fn test_id_serialization() {
        let json = serde_json::to_string(&AccountId::new(3)).unwrap();
        assert_eq!(json, "3");
        let id: CustomerId = serde_json::from_str("\"C-9\"").unwrap();
        assert_eq!(id, CustomerId::new("C-9"));
    }
}
