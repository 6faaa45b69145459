//! fltcli - an interactive financial log backed by a JSON sheet
//!
//! Transactions (date, reason, amount, path, counterparty, note) are kept as
//! an array of records in a single JSON file. Every command loads the whole
//! file, acts on it in memory and, when it changed something, writes it back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: location of the sheet file
//! - `error`: custom error types
//! - `models`: the transaction record
//! - `storage`: JSON sheet storage layer
//! - `services`: add, delete, find and modify on a loaded record set
//! - `display`: text rendering for the terminal
//! - `cli`: the interactive command loop
//!
//! # Example
//!
//! ```rust,ignore
//! use fltcli::cli::Session;
//! use fltcli::config::LedgerPaths;
//! use fltcli::storage::SheetStore;
//!
//! let paths = LedgerPaths::new();
//! let store = SheetStore::new(paths.sheet_file());
//! let stdin = std::io::stdin();
//! Session::new(store, stdin.lock(), std::io::stdout(), std::io::stderr()).run()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
