//! Account creation use case

use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Account, Customer, CustomerId};
use crate::storage::AccountRepository;

/// Opens new accounts in the repository
pub struct CreateAccount<'a> {
    repository: &'a AccountRepository,
}

impl<'a> CreateAccount<'a> {
    pub fn new(repository: &'a AccountRepository) -> Self {
        Self { repository }
    }

    /// Create a zero-balance account for a customer and save it
    ///
    /// Customer details are taken as entered. They are not stored anywhere;
    /// only the customer id is kept on the account.
    pub fn create_account(
        &self,
        customer_id: &str,
        name: &str,
        email: &str,
        phone: &str,
    ) -> LedgerResult<Account> {
        let customer = Customer::new(customer_id, name, email, phone);
        debug!(?customer, "customer details accepted, not persisted");

        let id = self.repository.next_account_id()?;
        let account = Account::new(id, CustomerId::new(customer_id));
        self.repository.save_account(account.clone())?;

        debug!(account_id = %account.id, customer_id = %account.customer_id, "account created");
        Ok(account)
    }
}
