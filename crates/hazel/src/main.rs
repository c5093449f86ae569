use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use hazel::analysis::MetricsRecord;
use hazel::compare::{ComparisonReport, ComplexityVerdict, MaintainabilityVerdict};
use hazel::config::{Config, RatingBands};
use hazel::{analyze, compare, input, summary};

const RULE_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "hazel")]
#[command(
  about = "Hazel - Code Complexity Metrics\nPattern-based complexity scoring and before/after comparison for code review"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Score one or more source files
  Analyze {
    /// Files to analyze
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
    /// Emit the records as JSON
    #[arg(long)]
    json: bool,
  },
  /// Compare complexity between two versions of a file
  Compare {
    /// The original version
    before: PathBuf,
    /// The changed version
    after: PathBuf,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
    /// Exit with an error when maintainability worsened
    #[arg(long)]
    check: bool,
  },
  /// Print a quick structural summary of a file
  Summary {
    /// File to summarize
    path: PathBuf,
    /// Emit the summary as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<()> {
  init_logging();

  let cli = Cli::parse();
  let config = Config::load()?;

  match cli.command {
    Commands::Analyze { paths, json } => analyze_files(&paths, json, &config),
    Commands::Compare { before, after, json, check } => {
      compare_files(&before, &after, json, check, &config)
    }
    Commands::Summary { path, json } => summarize_file(&path, json),
  }
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hazel=warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();
}

#[derive(Serialize)]
struct FileMetrics {
  path: PathBuf,
  metrics: MetricsRecord,
}

fn analyze_files(paths: &[PathBuf], json: bool, config: &Config) -> Result<()> {
  let mut records = Vec::new();
  for path in paths {
    tracing::debug!("analyzing {}", path.display());
    let source = input::read_source(path)?;
    records.push(FileMetrics { path: path.clone(), metrics: analyze(&source) });
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&records)?);
    return Ok(());
  }

  for FileMetrics { path, metrics } in &records {
    println!("{}", path.display().to_string().cyan());
    print_record(metrics, &config.ratings);
    println!();
  }
  Ok(())
}

fn compare_files(
  before_path: &Path,
  after_path: &Path,
  json: bool,
  check: bool,
  config: &Config,
) -> Result<()> {
  let before = analyze(&input::read_source(before_path)?);
  let after = analyze(&input::read_source(after_path)?);
  let report = compare(&before, &after);

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_comparison(&report, &config.ratings);
  }

  if check && report.maintainability_verdict == MaintainabilityVerdict::Worsened {
    process::exit(1);
  }
  Ok(())
}

fn summarize_file(path: &Path, json: bool) -> Result<()> {
  let source = input::read_source(path)?;
  let summary = summary::summarize(&source);

  if json {
    println!("{}", serde_json::to_string_pretty(&summary)?);
    return Ok(());
  }

  println!("{}", path.display().to_string().cyan());
  println!("  Functions:                {}", summary.functions);
  println!("  Classes:                  {}", summary.classes);
  println!("  Avg Line Length:          {:.2}", summary.avg_line_length);
  println!("  Complexity Score:         {}", summary.complexity_score);
  Ok(())
}

fn print_comparison(report: &ComparisonReport, bands: &RatingBands) {
  let rule = "=".repeat(RULE_WIDTH);

  println!("{rule}");
  println!("{}", "CODE COMPLEXITY COMPARISON".bold());
  println!("{rule}");

  println!();
  println!("BEFORE:");
  print_record(&report.before, bands);

  println!();
  println!("AFTER:");
  print_record(&report.after, bands);

  println!();
  println!("CHANGES:");
  println!("  Cyclomatic Complexity:    {:+}", report.cyclomatic_delta);
  println!("  Cognitive Complexity:     {:+}", report.cognitive_delta);
  println!("  Maintainability Index:    {:+.2}", report.maintainability_delta);
  println!("  Lines of Code:            {:+}", report.lines_delta);

  println!();
  println!("ASSESSMENT:");
  match report.maintainability_verdict {
    MaintainabilityVerdict::Improved => {
      println!("  {} Code is MORE maintainable", "✓".green());
    }
    MaintainabilityVerdict::Worsened => {
      println!("  {} Code is LESS maintainable", "⚠".yellow());
    }
    MaintainabilityVerdict::Unchanged => {
      println!("  {} Maintainability unchanged", "→".dimmed());
    }
  }
  match report.complexity_verdict {
    ComplexityVerdict::Decreased => println!("  {} Complexity DECREASED", "✓".green()),
    ComplexityVerdict::Increased => println!("  {} Complexity INCREASED", "⚠".yellow()),
    ComplexityVerdict::Unchanged => println!("  {} Complexity unchanged", "→".dimmed()),
  }

  println!("{rule}");
}

fn print_record(record: &MetricsRecord, bands: &RatingBands) {
  println!("  Cyclomatic Complexity:    {}", record.cyclomatic_complexity);
  println!("  Cognitive Complexity:     {}", record.cognitive_complexity);
  println!(
    "  Maintainability Index:    {:.2} ({})",
    record.maintainability_index,
    record.rating(bands)
  );
  println!("  Lines of Code:            {}", record.lines_of_code);
  println!("  Avg Line Length:          {:.2}", record.avg_line_length);
}
