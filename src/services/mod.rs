//! Business logic layer for fltcli
//!
//! Operations work on a record set already loaded from the sheet.

pub mod ledger;

pub use ledger::Ledger;
