//! Display formatting for terminal output
//!
//! Provides plain-text rendering of transactions and the help screen.

pub mod help;
pub mod transaction;

pub use help::{format_banner, format_help};
pub use transaction::{format_transaction_details, format_transaction_list};
