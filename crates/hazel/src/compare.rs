//! Before/after interpretation of two metrics records
//!
//! The comparison only depends on the shape of [`MetricsRecord`]; it never
//! re-reads source text. Only the maintainability index and the cyclomatic
//! complexity earn a qualitative verdict. Cognitive complexity and line
//! count are reported numerically, and average line length carries no delta
//! at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::MetricsRecord;

/// Direction of the maintainability index change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintainabilityVerdict {
  Improved,
  Worsened,
  Unchanged,
}

impl fmt::Display for MaintainabilityVerdict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Improved => "improved",
      Self::Worsened => "worsened",
      Self::Unchanged => "unchanged",
    };
    write!(f, "{label}")
  }
}

/// Direction of the cyclomatic complexity change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityVerdict {
  Decreased,
  Increased,
  Unchanged,
}

impl fmt::Display for ComplexityVerdict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Decreased => "decreased",
      Self::Increased => "increased",
      Self::Unchanged => "unchanged",
    };
    write!(f, "{label}")
  }
}

/// Outcome of comparing two versions of the same unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
  pub before: MetricsRecord,
  pub after: MetricsRecord,
  pub cyclomatic_delta: i64,
  pub cognitive_delta: i64,
  pub maintainability_delta: f64,
  pub lines_delta: i64,
  pub maintainability_verdict: MaintainabilityVerdict,
  pub complexity_verdict: ComplexityVerdict,
}

/// Compare two metrics records, after relative to before
pub fn compare(before: &MetricsRecord, after: &MetricsRecord) -> ComparisonReport {
  let cyclomatic_delta = after.cyclomatic_complexity as i64 - before.cyclomatic_complexity as i64;
  let cognitive_delta = after.cognitive_complexity as i64 - before.cognitive_complexity as i64;
  let maintainability_delta = after.maintainability_index - before.maintainability_index;
  let lines_delta = after.lines_of_code as i64 - before.lines_of_code as i64;

  ComparisonReport {
    before: before.clone(),
    after: after.clone(),
    cyclomatic_delta,
    cognitive_delta,
    maintainability_delta,
    lines_delta,
    maintainability_verdict: maintainability_verdict(maintainability_delta),
    complexity_verdict: complexity_verdict(cyclomatic_delta),
  }
}

fn maintainability_verdict(delta: f64) -> MaintainabilityVerdict {
  if delta > 0.0 {
    MaintainabilityVerdict::Improved
  } else if delta < 0.0 {
    MaintainabilityVerdict::Worsened
  } else {
    MaintainabilityVerdict::Unchanged
  }
}

fn complexity_verdict(delta: i64) -> ComplexityVerdict {
  if delta < 0 {
    ComplexityVerdict::Decreased
  } else if delta > 0 {
    ComplexityVerdict::Increased
  } else {
    ComplexityVerdict::Unchanged
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(cyclomatic: usize, cognitive: usize, index: f64, lines: usize) -> MetricsRecord {
    MetricsRecord {
      cyclomatic_complexity: cyclomatic,
      cognitive_complexity: cognitive,
      maintainability_index: index,
      lines_of_code: lines,
      avg_line_length: 24.0,
    }
  }

  #[test]
  fn test_simplifying_change() {
    let before = record(10, 20, 40.0, 120);
    let after = record(6, 12, 55.0, 90);

    let report = compare(&before, &after);

    assert_eq!(report.cyclomatic_delta, -4);
    assert_eq!(report.cognitive_delta, -8);
    assert_eq!(report.maintainability_delta, 15.0);
    assert_eq!(report.lines_delta, -30);
    assert_eq!(report.complexity_verdict, ComplexityVerdict::Decreased);
    assert_eq!(report.maintainability_verdict, MaintainabilityVerdict::Improved);
  }

  #[test]
  fn test_complicating_change() {
    let before = record(3, 4, 80.0, 40);
    let after = record(9, 15, 61.5, 75);

    let report = compare(&before, &after);

    assert_eq!(report.cyclomatic_delta, 6);
    assert_eq!(report.complexity_verdict, ComplexityVerdict::Increased);
    assert_eq!(report.maintainability_verdict, MaintainabilityVerdict::Worsened);
  }

  #[test]
  fn test_identical_records_are_unchanged() {
    let a = record(5, 7, 72.0, 50);

    let report = compare(&a, &a);

    assert_eq!(report.cyclomatic_delta, 0);
    assert_eq!(report.cognitive_delta, 0);
    assert_eq!(report.maintainability_delta, 0.0);
    assert_eq!(report.lines_delta, 0);
    assert_eq!(report.complexity_verdict, ComplexityVerdict::Unchanged);
    assert_eq!(report.maintainability_verdict, MaintainabilityVerdict::Unchanged);
  }

  #[test]
  fn test_deltas_are_antisymmetric() {
    let a = record(12, 30, 45.0, 200);
    let b = record(7, 18, 58.0, 140);

    let forward = compare(&a, &b);
    let backward = compare(&b, &a);

    assert_eq!(forward.cyclomatic_delta, -backward.cyclomatic_delta);
    assert_eq!(forward.cognitive_delta, -backward.cognitive_delta);
  }

  #[test]
  fn test_verdict_tracks_index_sign() {
    let base = record(4, 4, 70.0, 30);

    for (index, expected) in [
      (70.1, MaintainabilityVerdict::Improved),
      (69.9, MaintainabilityVerdict::Worsened),
      (70.0, MaintainabilityVerdict::Unchanged),
    ] {
      let after = record(4, 4, index, 30);
      assert_eq!(compare(&base, &after).maintainability_verdict, expected);
    }
  }

  #[test]
  fn test_report_owns_both_records() {
    let before = record(2, 1, 90.0, 10);
    let after = record(3, 2, 88.0, 12);

    let report = compare(&before, &after);

    assert_eq!(report.before, before);
    assert_eq!(report.after, after);
  }
}
