//! Interactive console session
//!
//! Drives the create/login menu and the per-account transaction menu. The
//! session is generic over its input and output so it can run against
//! stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::{Settings, StatementFormat};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Money};
use crate::services::{CreateAccount, GenerateAccountStatement, TransactionService};
use crate::storage::AccountRepository;

const MAIN_PROMPT: &str =
    "Would you like to create a new account or log in to transact? (create/login/exit): ";
const TRANSACTION_PROMPT: &str =
    "Do you want to make a transaction? (deposit/withdraw/balance/statement/exit): ";

/// Choice at the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Create,
    Login,
    Exit,
}

impl MainAction {
    /// Parse a menu choice, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "create" => Some(Self::Create),
            "login" => Some(Self::Login),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Choice at the transaction prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Deposit,
    Withdraw,
    Balance,
    Statement,
    Exit,
}

impl TransactionAction {
    /// Parse a menu choice, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "withdraw" => Some(Self::Withdraw),
            "balance" => Some(Self::Balance),
            "statement" => Some(Self::Statement),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the session keeps prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfInput,
}

/// One interactive console session over a shared repository
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    repository: &'a AccountRepository,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        repository: &'a AccountRepository,
        settings: &'a Settings,
    ) -> Self {
        Self {
            input,
            output,
            repository,
            settings,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Rejected operations are printed and the menus continue; only console
    /// I/O and storage failures are returned.
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            let Some(choice) = self.prompt(MAIN_PROMPT)? else {
                debug!("input closed at main menu");
                return Ok(());
            };

            let flow = match MainAction::parse(&choice) {
                Some(MainAction::Create) => self.create()?,
                Some(MainAction::Login) => self.login()?,
                Some(MainAction::Exit) => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter 'create', 'login', or 'exit'."
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::EndOfInput {
                return Ok(());
            }
        }
    }

    fn create(&mut self) -> LedgerResult<Flow> {
        let mut fields = Vec::with_capacity(4);
        for label in [
            "Enter customer ID: ",
            "Enter customer name: ",
            "Enter customer email: ",
            "Enter customer phone number: ",
        ] {
            match self.prompt(label)? {
                Some(value) => fields.push(value),
                None => return Ok(Flow::EndOfInput),
            }
        }

        let account = CreateAccount::new(self.repository)
            .create_account(&fields[0], &fields[1], &fields[2], &fields[3])?;
        info!(account_number = %account.account_number, "account opened");
        writeln!(
            self.output,
            "Account created: {} with initial balance {}",
            account.account_number,
            account.balance()
        )?;

        self.transaction_menu(account.id)
    }

    fn login(&mut self) -> LedgerResult<Flow> {
        let Some(raw) = self.prompt("Enter your account ID to log in: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let account = self.lookup_account(&raw);
        let Some(account) = self.report(account)? else {
            return Ok(Flow::Continue);
        };
        writeln!(
            self.output,
            "Logged in successfully. Current balance for account {}: {}",
            account.account_number,
            account.balance()
        )?;

        self.transaction_menu(account.id)
    }

    /// Resolve login input to a stored account
    ///
    /// Any signed run of digits counts as an account id; ids outside the
    /// account id range can never exist and so are not found.
    fn lookup_account(&self, raw: &str) -> LedgerResult<Account> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix(|c: char| c == '-' || c == '+')
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::invalid_input("account ID", trimmed));
        }

        match trimmed.parse::<AccountId>() {
            Ok(id) => self.repository.find_account_by_id(id),
            Err(_) => Err(LedgerError::account_not_found(trimmed)),
        }
    }

    fn transaction_menu(&mut self, account_id: AccountId) -> LedgerResult<Flow> {
        let transactions = TransactionService::new(self.repository);

        loop {
            let Some(choice) = self.prompt(TRANSACTION_PROMPT)? else {
                return Ok(Flow::EndOfInput);
            };

            match TransactionAction::parse(&choice) {
                Some(TransactionAction::Deposit) => {
                    let Some(amount) = self.prompt_amount("Enter amount to deposit: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let result = amount.and_then(|a| transactions.deposit(account_id, a));
                    if let Some(balance) = self.report(result)? {
                        writeln!(self.output, "New balance after deposit: {}", balance)?;
                    }
                }
                Some(TransactionAction::Withdraw) => {
                    let Some(amount) = self.prompt_amount("Enter amount to withdraw: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let result = amount.and_then(|a| transactions.withdraw(account_id, a));
                    if let Some(balance) = self.report(result)? {
                        writeln!(self.output, "New balance after withdrawal: {}", balance)?;
                    }
                }
                Some(TransactionAction::Balance) => {
                    let balance = transactions.balance(account_id)?;
                    writeln!(self.output, "Current balance: {}", balance)?;
                }
                Some(TransactionAction::Statement) => self.print_statement(account_id)?,
                Some(TransactionAction::Exit) => {
                    writeln!(self.output, "Exiting transaction menu.")?;
                    return Ok(Flow::Continue);
                }
                None => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter 'deposit', 'withdraw', 'balance', 'statement', or 'exit'."
                    )?;
                }
            }
        }
    }

    fn print_statement(&mut self, account_id: AccountId) -> LedgerResult<()> {
        let statements = GenerateAccountStatement::new(self.repository);

        match self.settings.statement_format {
            StatementFormat::Text => {
                let text = statements.generate_account_statement(account_id)?;
                writeln!(self.output, "{}", text)?;
            }
            StatementFormat::Json => {
                let json = statements.statement(account_id)?.to_json()?;
                writeln!(self.output, "{}", json)?;
            }
        }
        Ok(())
    }

    /// Prompt for an amount; the inner result carries a parse failure
    fn prompt_amount(&mut self, text: &str) -> LedgerResult<Option<LedgerResult<Money>>> {
        Ok(self.prompt(text)?.map(|raw| {
            Money::parse(&raw).map_err(|_| LedgerError::invalid_input("amount", raw.trim()))
        }))
    }

    /// Print a domain error and swallow it; pass anything else up
    fn report<T>(&mut self, result: LedgerResult<T>) -> LedgerResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_domain() => {
                debug!(error = %e, "operation rejected");
                writeln!(self.output, "{}", e)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Write a prompt and read one line without its terminator, `None` at end of input
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
