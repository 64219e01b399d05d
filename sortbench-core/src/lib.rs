#![warn(missing_docs)]
//! Sortbench Core - Measurement Engine
//!
//! This crate provides the measurement methodology for comparing sorting
//! algorithms:
//! - `SizeSchedule` derives the ramp of array sizes from a maximum size
//! - `Dataset` holds one random base array plus its ascending and descending views
//! - `Algorithm` implements the five sorting strategies behind one dispatch point
//! - `BenchmarkRunner` drives warm-up and the repeated-trial measurement loop
//! - `ResultStore` collects the aggregated samples handed to reporting
//!
//! The core is strictly single-threaded and performs no I/O; rendering and
//! export live in `sortbench-report` and `sortbench-cli`.

mod algorithm;
mod dataset;
mod error;
mod measure;
mod runner;
mod schedule;
mod store;

pub use algorithm::Algorithm;
pub use dataset::{CaseKind, Dataset};
pub use error::RunError;
pub use measure::Timer;
pub use runner::{BenchmarkRunner, RunEvent, REPETITIONS, WARMUP_FLOOR};
pub use schedule::SizeSchedule;
pub use store::{ResultStore, Sample};
