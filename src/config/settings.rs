//! Runtime settings for Teller
//!
//! Settings come from command-line flags only; the ledger reads no config
//! files or environment variables.

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

/// How the `statement` menu action prints a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    /// Plain text lines (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// User settings for a session
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct Settings {
    /// Diagnostic log filter written to stderr (e.g. "warn", "teller=debug")
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Output format of account statements
    #[arg(long, value_enum, default_value_t = StatementFormat::Text)]
    pub statement_format: StatementFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            statement_format: StatementFormat::default(),
        }
    }
}
