#![warn(missing_docs)]
//! # Sortbench
//!
//! Wall-clock comparison of classic sorting strategies across input shapes
//! and sizes.
//!
//! Sortbench runs five strategies (bubble, insertion, selection, merge,
//! quick) against three input cases (random, pre-sorted, reverse-sorted)
//! over a ramp of array sizes, averaging 50 timed trials per combination:
//! - **Fresh input per trial**: every timed sort works on its own copy, so
//!   in-place mutation never leaks into the next measurement
//! - **Warm-up pass**: each strategy runs once untimed before measurement
//! - **Deterministic replay**: seed the runner for reproducible datasets and
//!   pivot choices
//! - **Reports**: human-readable tables, JSON, and a CSV file set with one
//!   consolidated file plus one file per strategy
//!
//! ## Quick Start
//!
//! ```no_run
//! use sortbench::{BenchmarkRunner, Report};
//!
//! let runner = BenchmarkRunner::new(10_000);
//! let store = runner.run().expect("run failed");
//! for sample in store.all() {
//!     println!("{} n={} {}: {:.3} ms",
//!         sample.algorithm, sample.size, sample.case, sample.mean_ms);
//! }
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, BenchmarkRunner, CaseKind, Dataset, ResultStore, RunError, RunEvent, Sample,
    SizeSchedule, Timer, REPETITIONS, WARMUP_FLOOR,
};

// Re-export report types
pub use sortbench_report::{
    consolidated_csv, generate_json_report, per_algorithm_csvs, write_csv_files, AlgorithmSummary,
    OutputFormat, Report, ReportMeta, ReportSummary, RunConfig, SampleRecord, SystemInfo,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, BenchmarkRunner, CaseKind, Report, ResultStore, RunEvent, Sample, SizeSchedule,
    };
}

/// Run the sortbench CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     sortbench::run()
/// }
/// ```
pub use sortbench_cli::run;
