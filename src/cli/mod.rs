//! Console front end
//!
//! Bridges the interactive prompts with the service layer.

pub mod session;

pub use session::{MainAction, Session, TransactionAction};
