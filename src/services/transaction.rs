//! Transaction service
//!
//! Balance mutations and queries for a single account, routed through the
//! repository so stored state is always the one that changes.

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{AccountId, Money};
use crate::storage::AccountRepository;

/// Service for deposits, withdrawals, and balance queries
pub struct TransactionService<'a> {
    repository: &'a AccountRepository,
}

impl<'a> TransactionService<'a> {
    pub fn new(repository: &'a AccountRepository) -> Self {
        Self { repository }
    }

    /// Deposit into an account, returning the new balance
    pub fn deposit(&self, account_id: AccountId, amount: Money) -> LedgerResult<Money> {
        let result = self
            .repository
            .update_account(account_id, |account| account.deposit(amount));

        match &result {
            Ok(balance) => debug!(%account_id, %amount, %balance, "deposit applied"),
            Err(e) => debug!(%account_id, %amount, error = %e, "deposit rejected"),
        }
        result
    }

    /// Withdraw from an account, returning the new balance
    pub fn withdraw(&self, account_id: AccountId, amount: Money) -> LedgerResult<Money> {
        let result = self
            .repository
            .update_account(account_id, |account| account.withdraw(amount));

        match &result {
            Ok(balance) => debug!(%account_id, %amount, %balance, "withdrawal applied"),
            Err(e) => debug!(%account_id, %amount, error = %e, "withdrawal rejected"),
        }
        result
    }

    /// Current balance of an account
    pub fn balance(&self, account_id: AccountId) -> LedgerResult<Money> {
        Ok(self.repository.find_account_by_id(account_id)?.balance())
    }
}
