//! In-memory account repository
//!
//! Keeps accounts in insertion order for the lifetime of the process and
//! hands out sequential account ids.

use std::sync::RwLock;

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, CustomerId};

#[derive(Debug, Default)]
struct AccountTable {
    accounts: Vec<Account>,
    last_id: u32,
}

/// Repository for accounts
#[derive(Debug, Default)]
pub struct AccountRepository {
    data: RwLock<AccountTable>,
}

impl AccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next account id
    ///
    /// Ids come from a counter rather than the list length, so they stay
    /// unique even if accounts are ever removed.
    pub fn next_account_id(&self) -> LedgerResult<AccountId> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = AccountId::new(data.last_id)
            .next()
            .ok_or_else(|| LedgerError::Storage("Account id space exhausted".into()))?;
        data.last_id = id.value();
        Ok(id)
    }

    /// Append an account; ids and account numbers are not checked for uniqueness
    pub fn save_account(&self, account: Account) -> LedgerResult<()> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        debug!(account_id = %account.id, account_number = %account.account_number, "saving account");
        data.last_id = data.last_id.max(account.id.value());
        data.accounts.push(account);
        Ok(())
    }

    /// Find an account by its id
    pub fn find_account_by_id(&self, id: AccountId) -> LedgerResult<Account> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        data.accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))
    }

    /// Find every account owned by a customer, possibly none
    pub fn find_accounts_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> LedgerResult<Vec<Account>> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .accounts
            .iter()
            .filter(|a| &a.customer_id == customer_id)
            .cloned()
            .collect())
    }

    /// Apply a mutation to a stored account in place
    ///
    /// The first account with a matching id is updated; the closure's error
    /// is returned as-is.
    pub fn update_account<T>(
        &self,
        id: AccountId,
        f: impl FnOnce(&mut Account) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let account = data
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| LedgerError::account_not_found(id.to_string()))?;

        f(account)
    }

    /// Count accounts
    pub fn count(&self) -> LedgerResult<usize> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn save_new(repo: &AccountRepository, customer: &str) -> AccountId {
        let id = repo.next_account_id().unwrap();
        repo.save_account(Account::new(id, CustomerId::new(customer)))
            .unwrap();
        id
    }

    #[test]
    fn test_empty_repository() {
        let repo = AccountRepository::new();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_account_by_id(AccountId::new(1)).is_err());
    }

    #[test]
    fn test_sequential_ids() {
        let repo = AccountRepository::new();
        assert_eq!(save_new(&repo, "a"), AccountId::new(1));
        assert_eq!(save_new(&repo, "b"), AccountId::new(2));
        assert_eq!(repo.next_account_id().unwrap(), AccountId::new(3));
    }

    #[test]
    fn test_counter_skips_past_manually_saved_ids() {
        let repo = AccountRepository::new();
        repo.save_account(Account::new(AccountId::new(10), CustomerId::new("x")))
            .unwrap();
        assert_eq!(repo.next_account_id().unwrap(), AccountId::new(11));
    }

    #[test]
    fn test_save_and_find() {
        let repo = AccountRepository::new();
        let id = save_new(&repo, "C1");

        let found = repo.find_account_by_id(id).unwrap();
        assert_eq!(found.account_number, "ACC00001");
        assert_eq!(found.customer_id, CustomerId::new("C1"));
    }

    #[test]
    fn test_find_unknown_id() {
        let repo = AccountRepository::new();
        save_new(&repo, "C1");

        let err = repo.find_account_by_id(AccountId::new(99)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicates_are_kept_and_first_wins() {
        let repo = AccountRepository::new();
        let id = AccountId::new(1);
        repo.save_account(Account::new(id, CustomerId::new("first")))
            .unwrap();
        repo.save_account(Account::new(id, CustomerId::new("second")))
            .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        let found = repo.find_account_by_id(id).unwrap();
        assert_eq!(found.customer_id, CustomerId::new("first"));
    }

    #[test]
    fn test_find_by_customer() {
        let repo = AccountRepository::new();
        save_new(&repo, "alice");
        save_new(&repo, "bob");
        save_new(&repo, "alice");

        let alice = repo
            .find_accounts_by_customer_id(&CustomerId::new("alice"))
            .unwrap();
        let ids: Vec<u32> = alice.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);

        let nobody = repo
            .find_accounts_by_customer_id(&CustomerId::new("carol"))
            .unwrap();
        assert!(nobody.is_empty());
    }

    #[test]
    fn test_update_account_in_place() {
        let repo = AccountRepository::new();
        let id = save_new(&repo, "C1");

        let balance = repo
            .update_account(id, |a| a.deposit(Money::from_cents(2500)))
            .unwrap();
        assert_eq!(balance, Money::from_cents(2500));
        assert_eq!(
            repo.find_account_by_id(id).unwrap().balance(),
            Money::from_cents(2500)
        );
    }

    #[test]
    fn test_failed_update_leaves_state() {
        let repo = AccountRepository::new();
        let id = save_new(&repo, "C1");

        let err = repo
            .update_account(id, |a| a.withdraw(Money::from_cents(1)))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds));

        let account = repo.find_account_by_id(id).unwrap();
        assert!(account.balance().is_zero());
        assert!(account.transaction_history().is_empty());

        let err = repo
            .update_account(AccountId::new(5), |a| a.deposit(Money::from_cents(1)))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
