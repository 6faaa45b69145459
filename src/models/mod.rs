//! Core data models for fltcli
//!
//! The ledger has a single entity: a transaction with a numeric id and six
//! free-text fields.

pub mod ids;
pub mod transaction;

pub use ids::TransactionId;
pub use transaction::{NewTransaction, Transaction, TransactionField};
