//! Configuration for report ratings
//!
//! Loads a JSON config from the working directory when present, otherwise
//! falls back to defaults. Only the rating bands are configurable; the
//! scoring formulas are not.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::HazelError;

/// Lower cutoffs for the maintainability rating bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBands {
  /// Indexes above this rate as excellent
  #[serde(default = "default_excellent")]
  pub excellent: f64,
  /// Indexes above this rate as good
  #[serde(default = "default_good")]
  pub good: f64,
  /// Indexes above this rate as fair; everything else is poor
  #[serde(default = "default_fair")]
  pub fair: f64,
}

fn default_excellent() -> f64 {
  85.0
}
fn default_good() -> f64 {
  65.0
}
fn default_fair() -> f64 {
  50.0
}

impl Default for RatingBands {
  fn default() -> Self {
    Self { excellent: default_excellent(), good: default_good(), fair: default_fair() }
  }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub ratings: RatingBands,
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, HazelError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|source| HazelError::InputUnavailable { path: path.to_path_buf(), source })?;
    let config = serde_json::from_str(&content)
      .map_err(|source| HazelError::ConfigInvalid { path: path.to_path_buf(), source })?;
    Ok(config)
  }

  /// Load configuration from the working directory or defaults
  pub fn load() -> Result<Self, HazelError> {
    let config_paths = [".hazel.json", "hazel.json"];

    for path in &config_paths {
      if Path::new(path).exists() {
        return Self::load_from_file(path);
      }
    }

    Ok(Config::default())
  }
}
