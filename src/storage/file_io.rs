//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave a half-written sheet behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::LedgerError;

/// Indentation used for every JSON document written to disk
const INDENT: &[u8] = b"    ";

/// Read a file as an untyped JSON value
pub fn read_json_value<P: AsRef<Path>>(path: P) -> Result<Value, LedgerError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| LedgerError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Create `path` holding an empty JSON object
///
/// Used only when the file does not exist yet.
pub fn write_placeholder<P: AsRef<Path>>(path: P) -> Result<(), LedgerError> {
    let path = path.as_ref();
    fs::write(path, "{}").map_err(|e| LedgerError::WriteFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write pretty-printed JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all. Output uses
/// four-space indentation and ends with a newline.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let write_failure = |message: String| LedgerError::WriteFailure {
        path: path.to_path_buf(),
        message,
    };

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| write_failure(format!("Failed to create temp file: {}", e)))?;

    let result = (|| {
        let mut writer = BufWriter::new(file);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        data.serialize(&mut serializer)
            .map_err(|e| write_failure(format!("Failed to serialize data: {}", e)))?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|e| write_failure(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| write_failure(format!("Failed to sync data: {}", e)))?;
        fs::rename(&temp_path, path)
            .map_err(|e| write_failure(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };
        write_json_atomic(&path, &data).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\n    \"name\": \"test\",\n    \"value\": 42\n}\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &Vec::<i32>::new()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("test.json");

        let err = write_json_atomic(&path, &Vec::<i32>::new()).unwrap_err();
        assert!(matches!(err, LedgerError::WriteFailure { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_placeholder_is_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sheet.json");

        write_placeholder(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(read_json_value(&path), Err(LedgerError::Json(_))));
    }
}
