//! Statement display formatting

use crate::services::statement::AccountStatement;

/// Format a statement as console text, one newline-terminated line each
pub fn format_statement(statement: &AccountStatement) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account ID: {}\n", statement.account_id));
    output.push_str(&format!("Account Number: {}\n", statement.account_number));
    output.push_str(&format!("Current Balance: {}\n", statement.balance));
    output.push_str("Transaction History:\n");

    if statement.transactions.is_empty() {
        output.push_str("No transactions made yet.\n");
    } else {
        for entry in &statement.transactions {
            output.push_str(&format!("- {}\n", entry));
        }
    }

    output
}
