//! Transaction id wrapper
//!
//! Ids are small positive integers assigned by the ledger. They are dense
//! after every delete but a hand-edited sheet may contain gaps or repeats, so
//! the wrapper accepts any integer read from disk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Identifier of a transaction within the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// The id handed out when the sheet is empty
    pub const FIRST: TransactionId = TransactionId(1);

    /// Wrap a raw id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The id following this one
    ///
    /// Fails instead of wrapping when a hand-edited sheet already holds the
    /// largest representable id.
    pub fn next(&self) -> Result<Self, LedgerError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| LedgerError::InvalidInput("transaction id overflow".into()))
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TransactionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| LedgerError::InvalidInput(format!("'{}' is not a transaction id", s)))
    }
}
