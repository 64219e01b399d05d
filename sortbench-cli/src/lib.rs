#![warn(missing_docs)]
//! Sortbench CLI Library
//!
//! Command-line front end for the measurement core: argument parsing,
//! configuration discovery, progress display, and report output.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     sortbench_cli::run()
//! }
//! ```

mod config;
mod formatting;
mod metadata;

pub use config::*;
pub use formatting::format_human_output;
pub use metadata::build_report_meta;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortbench_core::{BenchmarkRunner, ResultStore, RunError, RunEvent, REPETITIONS};
use sortbench_report::{
    consolidated_csv, generate_json_report, write_csv_files, OutputFormat, Report, RunConfig,
};
use std::io::Write;
use std::path::PathBuf;

/// Sortbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "Sortbench - wall-clock comparison of sorting strategies")]
pub struct Cli {
    /// Maximum array size; the run ramps up to this value
    pub max_size: Option<i64>,

    /// Output format: human, json, csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to write the CSV file set into
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the sortbench CLI with arguments from the environment.
/// This is the main entry point for the `sortbench` binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the sortbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench=info")
            .init();
    }

    // Discover sortbench.toml configuration (CLI flags override)
    let config = SortbenchConfig::discover().unwrap_or_default();

    // Resolve format: CLI wins if explicitly set (not default "human"), else sortbench.toml
    let format_str = if cli.format != "human" {
        cli.format.clone()
    } else {
        config.output.format.clone()
    };
    let format: OutputFormat = format_str
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let max_size = cli.max_size.unwrap_or(config.runner.max_size);
    if max_size <= 0 {
        tracing::warn!(max_size, "non-positive maximum size, clamping to 1");
    }

    tracing::info!(max_size, repetitions = REPETITIONS, "starting run");

    // Seeded runs use a fixed StdRng so dataset contents and pivot choices
    // repeat across invocations
    let (store, sizes, warmup_size) = match cli.seed {
        Some(seed) => execute(BenchmarkRunner::with_rng(
            max_size,
            StdRng::seed_from_u64(seed),
        ))?,
        None => execute(BenchmarkRunner::new(max_size))?,
    };

    let meta = build_report_meta(RunConfig {
        max_size,
        repetitions: REPETITIONS,
        warmup_size,
        sizes,
        seed: cli.seed,
    });
    let report = Report::build(meta, store.all());

    // Generate output
    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => consolidated_csv(&report),
        OutputFormat::Human => format_human_output(&report),
    };

    // Write output
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    // CSV file set: CLI flag wins, else sortbench.toml
    let export_dir = cli
        .export_dir
        .or_else(|| config.output.export_dir.as_ref().map(PathBuf::from));
    if let Some(dir) = export_dir {
        let written = write_csv_files(&report, &dir)?;
        for path in &written {
            tracing::info!(path = %path.display(), "wrote CSV");
        }
        println!("{} CSV files written to: {}", written.len(), dir.display());
    }

    Ok(())
}

/// Execute a run with a progress bar over its events, returning the store
/// along with the sizes and warm-up size the consumed runner was built with.
fn execute<R: Rng>(
    runner: BenchmarkRunner<R>,
) -> Result<(ResultStore, Vec<usize>, usize), RunError> {
    let sizes = runner.schedule().sizes().to_vec();
    let warmup_size = runner.warmup_size();

    let pb = ProgressBar::new(runner.total_samples() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let store = runner.run_with(|event| match event {
        RunEvent::WarmupStarted { size } => {
            pb.set_message(format!("warm-up ({} elements)", size));
        }
        RunEvent::SizeStarted { size } => {
            pb.set_message(format!("size {}", size));
        }
        RunEvent::SampleRecorded(_) => pb.inc(1),
        RunEvent::Completed { .. } => pb.finish_and_clear(),
    })?;

    Ok((store, sizes, warmup_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sortbench"]);
        assert!(cli.max_size.is_none());
        assert_eq!(cli.format, "human");
        assert!(cli.seed.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_positional_size_and_flags() {
        let cli = Cli::parse_from(["sortbench", "5000", "--format", "json", "--seed", "7"]);
        assert_eq!(cli.max_size, Some(5000));
        assert_eq!(cli.format, "json");
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_execute_reports_schedule_and_store() {
        let runner = BenchmarkRunner::with_rng(200, StdRng::seed_from_u64(9));
        let (store, sizes, warmup_size) = execute(runner).unwrap();

        assert_eq!(sizes, vec![100, 200]);
        assert_eq!(warmup_size, 1000);
        assert_eq!(store.len(), 30);
    }
}
