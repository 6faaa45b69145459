//! Interactive command-line front end
//!
//! Reads whitespace-delimited commands and dispatches them to the ledger
//! service, loading and saving the sheet around each one.

pub mod command;
pub mod input;
pub mod session;

pub use command::Command;
pub use input::TokenReader;
pub use session::{Flow, Session};
