//! Storage layer for fltcli
//!
//! Provides the JSON sheet store with atomic, pretty-printed writes.

pub mod file_io;
pub mod sheet;

pub use sheet::SheetStore;
