//! Error surface of the I/O boundary
//!
//! The scoring engine itself is total; only reading inputs and config can
//! fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HazelError {
  #[error("cannot read {path}: {source}")]
  InputUnavailable { path: PathBuf, source: std::io::Error },

  #[error("invalid config {path}: {source}")]
  ConfigInvalid { path: PathBuf, source: serde_json::Error },
}
