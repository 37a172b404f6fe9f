//! Diagnostic logging setup
//!
//! Events go to stderr so the console dialogue on stdout stays clean.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::settings::Settings;
use crate::error::{LedgerError, LedgerResult};

/// Build the log filter from settings
pub fn log_filter(settings: &Settings) -> LedgerResult<EnvFilter> {
    EnvFilter::try_new(&settings.log_level).map_err(|e| {
        LedgerError::Config(format!("Invalid log level '{}': {}", settings.log_level, e))
    })
}

/// Install the global tracing subscriber
pub fn init_logging(settings: &Settings) -> LedgerResult<()> {
    tracing_subscriber::registry()
        .with(log_filter(settings)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialize logging: {}", e)))
}
