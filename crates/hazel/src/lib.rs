//! Hazel - complexity metrics for code review
//!
//! Scores raw source text with pattern-based cyclomatic and cognitive
//! complexity plus a composite maintainability index, and interprets the
//! deltas between two versions of the same unit. Scanning is textual:
//! whole-word keyword matching, no parse tree.

pub mod analysis;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod summary;

pub use analysis::{analyze, MaintainabilityRating, MetricsRecord};
pub use compare::{compare, ComparisonReport, ComplexityVerdict, MaintainabilityVerdict};
pub use config::{Config, RatingBands};
pub use error::HazelError;
