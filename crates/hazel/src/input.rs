//! File-reading boundary for the scoring engine
//!
//! All I/O happens here, before the pure analysis functions run.

use std::fs;
use std::path::Path;

use crate::error::HazelError;

/// Read one unit of source text from disk
pub fn read_source(path: &Path) -> Result<String, HazelError> {
  fs::read_to_string(path)
    .map_err(|source| HazelError::InputUnavailable { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::path::PathBuf;

  #[test]
  fn test_read_source_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("unit.py");
    fs::write(&path, "x = 1\n").unwrap();

    assert_eq!(read_source(&path).unwrap(), "x = 1\n");
  }

  #[test]
  fn test_missing_file_is_input_unavailable() {
    let result = read_source(&PathBuf::from("no/such/file.py"));

    let err = result.unwrap_err();
    assert!(matches!(err, HazelError::InputUnavailable { .. }));
    assert!(err.to_string().contains("no/such/file.py"));
  }
}
