//! Account statement use case
//!
//! Builds a snapshot of an account's id, number, balance, and history. The
//! snapshot renders as console text or JSON.

use serde::Serialize;

use crate::display::statement::format_statement;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Money};
use crate::storage::AccountRepository;

/// Point-in-time view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatement {
    pub account_id: AccountId,
    pub account_number: String,
    pub balance: Money,
    pub transactions: Vec<String>,
}

impl AccountStatement {
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.id,
            account_number: account.account_number.clone(),
            balance: account.balance(),
            transactions: account.transaction_history().to_vec(),
        }
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> LedgerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Io(format!("Failed to serialize statement: {}", e)))
    }
}

/// Generates statements for stored accounts
pub struct GenerateAccountStatement<'a> {
    repository: &'a AccountRepository,
}

impl<'a> GenerateAccountStatement<'a> {
    pub fn new(repository: &'a AccountRepository) -> Self {
        Self { repository }
    }

    /// Snapshot an account
    pub fn statement(&self, account_id: AccountId) -> LedgerResult<AccountStatement> {
        let account = self.repository.find_account_by_id(account_id)?;
        Ok(AccountStatement::from_account(&account))
    }

    /// Text statement for an account
    pub fn generate_account_statement(&self, account_id: AccountId) -> LedgerResult<String> {
        Ok(format_statement(&self.statement(account_id)?))
    }
}
