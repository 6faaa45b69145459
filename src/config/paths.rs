//! Path management for fltcli
//!
//! The sheet defaults to `sheet.json` in the working directory. A different
//! location can be injected at startup, which is how tests point the ledger
//! at a temporary directory.

use std::path::{Path, PathBuf};

/// Default file name of the sheet
pub const DEFAULT_SHEET_FILE: &str = "sheet.json";

/// Manages the paths used by fltcli
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPaths {
    sheet_file: PathBuf,
}

impl LedgerPaths {
    /// Paths rooted at the working directory, using the default sheet name
    pub fn new() -> Self {
        Self::with_sheet_file(DEFAULT_SHEET_FILE)
    }

    /// Use an explicit sheet file
    pub fn with_sheet_file(sheet_file: impl Into<PathBuf>) -> Self {
        Self {
            sheet_file: sheet_file.into(),
        }
    }

    /// Get the path to the sheet file
    pub fn sheet_file(&self) -> &Path {
        &self.sheet_file
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_sheet_file() {
        let paths = LedgerPaths::default();
        assert_eq!(paths.sheet_file(), Path::new("sheet.json"));
    }

    #[test]
    fn test_sheet_inside_temp_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_sheet_file(temp_dir.path().join("sheet.json"));

        assert_eq!(paths.sheet_file(), temp_dir.path().join("sheet.json"));
    }

    #[test]
    fn test_explicit_sheet_file() {
        let paths = LedgerPaths::with_sheet_file("/tmp/bills-2024.json");
        assert_eq!(paths.sheet_file(), Path::new("/tmp/bills-2024.json"));
    }
}
