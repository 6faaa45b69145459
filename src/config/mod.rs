//! Configuration module for fltcli
//!
//! The only configurable value is the location of the sheet file, resolved
//! once at startup and handed to the storage layer.

pub mod paths;

pub use paths::LedgerPaths;
