//! Account model
//!
//! A customer's ledger account: balance plus an append-only history of
//! human-readable entries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ids::{AccountId, CustomerId};
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// A ledger account
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Sequential identifier
    pub id: AccountId,

    /// Owning customer, existence not checked
    pub customer_id: CustomerId,

    /// Display number derived from the id (e.g., "ACC00001")
    pub account_number: String,

    balance: Money,

    history: Vec<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the balance last changed
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, customer_id: CustomerId) -> Self {
        let now = Utc::now();
        Self {
            id,
            customer_id,
            account_number: id.account_number(),
            balance: Money::zero(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Deposit money into the account, returning the new balance
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::invalid_deposit());
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOutOfRange)?;

        self.record(balance, format!("Deposited: {}", amount));
        Ok(self.balance)
    }

    /// Withdraw money from the account, returning the new balance
    ///
    /// The balance never drops below zero.
    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::invalid_withdrawal());
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }

        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOutOfRange)?;
        self.record(balance, format!("Withdraw: {}", amount));
        Ok(self.balance)
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// History entries in the order they were recorded
    pub fn transaction_history(&self) -> &[String] {
        &self.history
    }

    fn record(&mut self, balance: Money, entry: String) {
        self.balance = balance;
        self.history.push(entry);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(AccountId::new(1), CustomerId::new("C1"))
    }

    fn money(units: i64) -> Money {
        Money::from_cents(units * 100)
    }

    #[test]
    fn test_new_account() {
        let account = account();
        assert_eq!(account.account_number, "ACC00001");
        assert_eq!(account.balance(), Money::zero());
        assert!(account.transaction_history().is_empty());
    }

    #[test]
    fn test_deposit_then_withdraw() {
        let mut account = account();
        assert_eq!(account.deposit(money(100)).unwrap(), money(100));
        assert_eq!(account.withdraw(money(30)).unwrap(), money(70));
        assert_eq!(account.balance(), money(70));
        assert_eq!(
            account.transaction_history(),
            ["Deposited: 100.0", "Withdraw: 30.0"]
        );
    }

    #[test]
    fn test_non_positive_deposit_rejected() {
        let mut account = account();
        account.deposit(money(10)).unwrap();

        for amount in [Money::zero(), money(-5)] {
            let err = account.deposit(amount).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount { .. }));
            assert_eq!(err.to_string(), "Deposit amount must be positive.");
        }
        assert_eq!(account.balance(), money(10));
        assert_eq!(account.transaction_history().len(), 1);
    }

    #[test]
    fn test_non_positive_withdrawal_rejected() {
        let mut account = account();
        account.deposit(money(10)).unwrap();

        let err = account.withdraw(Money::zero()).unwrap_err();
        assert_eq!(err.to_string(), "Withdrawal amount must be positive.");
        assert_eq!(account.balance(), money(10));
    }

    #[test]
    fn test_overdraft_rejected() {
        let mut account = account();
        let err = account.withdraw(money(50)).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds));
        assert_eq!(account.balance(), Money::zero());
        assert!(account.transaction_history().is_empty());

        account.deposit(money(20)).unwrap();
        assert!(account.withdraw(Money::from_cents(2001)).is_err());
        assert_eq!(account.withdraw(money(20)).unwrap(), Money::zero());
    }

    #[test]
    fn test_deposit_overflow_leaves_account_unchanged() {
        let mut account = account();
        account.deposit(Money::from_cents(i64::MAX)).unwrap();

        let err = account.deposit(Money::from_cents(1)).unwrap_err();
        assert!(matches!(err, LedgerError::AmountOutOfRange));
        assert_eq!(account.balance(), Money::from_cents(i64::MAX));
        assert_eq!(account.transaction_history().len(), 1);
    }

    #[test]
    fn test_balance_matches_sum_of_operations() {
        let mut account = account();
        let ops: [(bool, i64); 6] = [
            (true, 500),
            (false, 120),
            (false, 1000),
            (true, 75),
            (false, 455),
            (false, 1),
        ];

        let mut expected = 0;
        for (is_deposit, cents) in ops {
            let amount = Money::from_cents(cents);
            let result = if is_deposit {
                account.deposit(amount)
            } else {
                account.withdraw(amount)
            };
            if result.is_ok() {
                expected += if is_deposit { cents } else { -cents };
            }
            assert!(!account.balance().is_negative());
        }
        assert_eq!(account.balance().cents(), expected);
    }

    #[test]
    fn test_fractional_history_entries() {
        let mut account = account();
        account.deposit(Money::from_cents(1050)).unwrap();
        account.withdraw(Money::from_cents(5)).unwrap();
        assert_eq!(
            account.transaction_history(),
            ["Deposited: 10.5", "Withdraw: 0.05"]
        );
    }

    #[test]
    fn test_serialization() {
        let mut account = account();
        account.deposit(money(5)).unwrap();
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["account_number"], "ACC00001");
        assert_eq!(value["balance"], 500);
        assert_eq!(value["history"][0], "Deposited: 5.0");
    }
}
