//! Binary entrypoint: read one JSON/YAML spec (file or stdin), write one
//! AnalysisReport JSON object to stdout.
//!
//! On failure an ErrorOutput object is written instead and the exit code is 1.
//! Logs go to stderr (`RUST_LOG`, default `warn`).

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use spec_scorer::types::ErrorOutput;
use spec_scorer::{decode, Config, InputFormat, Scorer, ScorerError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "spec-scorer", version, about = "Score an OpenAPI/Swagger document")]
struct Cli {
  /// Spec file to score; reads stdin when omitted.
  file: Option<PathBuf>,

  /// Display name recorded in the report (defaults to the file name).
  #[arg(long)]
  name: Option<String>,

  /// Input format: auto, json or yaml.
  #[arg(long, env = "SPEC_SCORER_FORMAT", default_value = "auto")]
  format: InputFormat,

  /// Pretty-print the report.
  #[arg(long, env = "SPEC_SCORER_PRETTY")]
  pretty: bool,
}

impl Cli {
  fn config(&self) -> Config {
    Config {
      input_format: self.format.for_path(self.file.as_deref()),
      pretty: self.pretty,
      ..Config::default()
    }
  }

  fn display_name(&self, config: &Config) -> String {
    if let Some(name) = &self.name {
      return name.clone();
    }
    self
      .file
      .as_deref()
      .and_then(|p| p.file_name())
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| config.default_name.clone())
  }
}

fn main() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with(fmt::layer().with_writer(io::stderr))
    .init();

  let cli = Cli::parse();
  let config = cli.config();
  let name = cli.display_name(&config);

  if let Err(e) = run_binary(&cli, &config, &name) {
    tracing::error!(file = %name, error = %e, "spec-scorer failed");
    let err = ErrorOutput::new(e.to_string()).with_file(name);
    let mut out = io::stdout().lock();
    let _ = serde_json::to_writer(&mut out, &err);
    let _ = writeln!(out);
    std::process::exit(1);
  }
}

fn run_binary(cli: &Cli, config: &Config, name: &str) -> Result<(), ScorerError> {
  let raw = match &cli.file {
    Some(path) => std::fs::read_to_string(path)?,
    None => {
      let mut raw = String::new();
      io::stdin().lock().read_to_string(&mut raw)?;
      raw
    }
  };

  let doc = decode::decode(&raw, config.input_format)?;
  let report = Scorer::new().analyze(&doc, name);

  let mut out = io::stdout().lock();
  if config.pretty {
    serde_json::to_writer_pretty(&mut out, &report)?;
  } else {
    serde_json::to_writer(&mut out, &report)?;
  }
  writeln!(out)?;
  Ok(())
}
