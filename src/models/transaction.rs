//! Transaction model
//!
//! A transaction is one line of the financial log. Apart from the id every
//! field is opaque text: dates are not parsed and amounts are never used in
//! arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use crate::error::LedgerError;

/// A financial transaction
///
/// Field order here is the key order written to the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Position-derived identifier, renumbered on delete
    pub id: TransactionId,

    /// Transaction date, free text
    pub date: String,

    /// What the money was for
    pub reason: String,

    /// Amount, kept exactly as entered
    pub amount: String,

    /// Reference to a receipt or other file
    pub path: String,

    /// Who the other side of the transaction was
    pub counterparty: String,

    /// Free-form note
    pub note: String,
}

/// Input for creating a new transaction; the ledger assigns the id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: String,
    pub reason: String,
    pub amount: String,
    pub path: String,
    pub counterparty: String,
    pub note: String,
}

impl Transaction {
    /// Create a transaction from its parts
    pub fn new(id: TransactionId, input: NewTransaction) -> Self {
        Self {
            id,
            date: input.date,
            reason: input.reason,
            amount: input.amount,
            path: input.path,
            counterparty: input.counterparty,
            note: input.note,
        }
    }

    /// Check whether `keyword` occurs in any searchable field
    ///
    /// The id and amount are not searched. Matching is a plain, case-sensitive
    /// substring test.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        TransactionField::SEARCHABLE
            .iter()
            .any(|field| self.field(*field).contains(keyword))
    }

    /// Get the value of a text field
    pub fn field(&self, field: TransactionField) -> &str {
        match field {
            TransactionField::Date => &self.date,
            TransactionField::Reason => &self.reason,
            TransactionField::Amount => &self.amount,
            TransactionField::Path => &self.path,
            TransactionField::Counterparty => &self.counterparty,
            TransactionField::Note => &self.note,
        }
    }

    /// Overwrite a text field
    pub fn set_field(&mut self, field: TransactionField, value: impl Into<String>) {
        let slot = match field {
            TransactionField::Date => &mut self.date,
            TransactionField::Reason => &mut self.reason,
            TransactionField::Amount => &mut self.amount,
            TransactionField::Path => &mut self.path,
            TransactionField::Counterparty => &mut self.counterparty,
            TransactionField::Note => &mut self.note,
        };
        *slot = value.into();
    }
}

/// The text fields of a transaction that can be modified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    Date,
    Reason,
    Amount,
    Path,
    Counterparty,
    Note,
}

impl TransactionField {
    /// Every modifiable field, in sheet order
    pub const ALL: [TransactionField; 6] = [
        Self::Date,
        Self::Reason,
        Self::Amount,
        Self::Path,
        Self::Counterparty,
        Self::Note,
    ];

    /// Fields consulted by keyword search
    pub const SEARCHABLE: [TransactionField; 5] = [
        Self::Date,
        Self::Reason,
        Self::Path,
        Self::Counterparty,
        Self::Note,
    ];

    /// Name as used on the command line and in the sheet
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Reason => "reason",
            Self::Amount => "amount",
            Self::Path => "path",
            Self::Counterparty => "counterparty",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for TransactionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionField {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| LedgerError::UnknownField(s.to_string()))
    }
}
