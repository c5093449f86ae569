use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use edgar::{extract_endpoints, render_markdown};

#[derive(Parser)]
#[command(name = "edgar")]
#[command(
  about = "Edgar - API Documentation Extraction\nCollects annotated get_*/post_* signatures into markdown docs"
)]
#[command(version)]
struct Cli {
  /// Source file to document
  #[arg(value_name = "PATH")]
  path: PathBuf,

  /// Emit the extracted endpoints as JSON instead of markdown
  #[arg(long)]
  json: bool,
}

fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("edgar=warn"));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  let cli = Cli::parse();

  let source = std::fs::read_to_string(&cli.path)
    .with_context(|| format!("cannot read {}", cli.path.display()))?;
  tracing::debug!("scanning {}", cli.path.display());
  let endpoints = extract_endpoints(&source);

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&endpoints)?);
  } else {
    print!("{}", render_markdown(&endpoints));
  }

  Ok(())
}
