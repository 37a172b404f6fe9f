//! Configuration module for Teller
//!
//! Command-line settings and the diagnostic logging they control.

pub mod logging;
pub mod settings;

pub use logging::init_logging;
pub use settings::{Settings, StatementFormat};
