//! Sheet store for the transaction log
//!
//! The sheet is read and written whole: every command loads the full record
//! set and mutating commands write it back in full.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::file_io::{read_json_value, write_json_atomic, write_placeholder};

/// Reads and writes the full list of transactions in one JSON file
#[derive(Debug, Clone)]
pub struct SheetStore {
    path: PathBuf,
}

impl SheetStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every transaction from disk
    ///
    /// A missing file is created holding `{}` and yields an empty list. A file
    /// whose top-level value is not an array yields `StorageMalformed` and is
    /// left untouched. Decoding stops at the first bad element; there are no
    /// partial loads.
    pub fn load(&self) -> LedgerResult<Vec<Transaction>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "sheet missing, creating placeholder");
            write_placeholder(&self.path)?;
            return Ok(Vec::new());
        }

        let elements = match read_json_value(&self.path)? {
            Value::Array(elements) => elements,
            _ => {
                return Err(LedgerError::StorageMalformed {
                    path: self.path.clone(),
                })
            }
        };

        let transactions = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                serde_json::from_value::<Transaction>(element).map_err(|e| {
                    LedgerError::RecordMalformed {
                        index,
                        message: e.to_string(),
                    }
                })
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    /// Replace the file contents with `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        write_json_atomic(&self.path, &transactions)?;
        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}
