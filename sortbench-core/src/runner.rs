//! Benchmark Runner
//!
//! Drives one complete run: warm-up, then the strictly sequential measured
//! loop over sizes × cases × strategies. A runner is consumed by `run`, so the
//! Idle → WarmingUp → Running → Completed progression happens exactly once and
//! the runner cannot be reused; the observer callback exposes the phase
//! transitions to callers that want progress reporting.

use crate::algorithm::Algorithm;
use crate::dataset::{CaseKind, Dataset};
use crate::error::RunError;
use crate::measure::Timer;
use crate::schedule::SizeSchedule;
use crate::store::{ResultStore, Sample};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Trials averaged per (strategy, size, case) combination.
pub const REPETITIONS: u32 = 50;

/// Minimum warm-up dataset size.
pub const WARMUP_FLOOR: usize = 1000;

/// Progress notifications emitted while a run advances.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Warm-up is about to exercise every strategy, untimed.
    WarmupStarted {
        /// Size of the warm-up dataset: `max(1000, first scheduled size)`.
        size: usize,
    },
    /// Measurement moved on to the next scheduled size.
    SizeStarted {
        /// The size whose combinations are measured next.
        size: usize,
    },
    /// One aggregated sample was appended to the store.
    SampleRecorded(&'a Sample),
    /// The run finished; no further events follow.
    Completed {
        /// Total samples produced: `sizes × 3 × 5`.
        total_samples: usize,
    },
}

/// Executes one benchmark run and produces the [`ResultStore`].
pub struct BenchmarkRunner<R: Rng = ThreadRng> {
    schedule: SizeSchedule,
    rng: R,
}

impl BenchmarkRunner<ThreadRng> {
    /// Create a runner for sizes up to `max_size`, using process-local
    /// entropy. Non-positive sizes are clamped by the schedule.
    pub fn new(max_size: i64) -> Self {
        Self::with_rng(max_size, rand::thread_rng())
    }
}

impl<R: Rng> BenchmarkRunner<R> {
    /// Create a runner with an explicit random source, e.g. a seeded `StdRng`
    /// for reproducible runs.
    pub fn with_rng(max_size: i64, rng: R) -> Self {
        Self {
            schedule: SizeSchedule::for_max(max_size),
            rng,
        }
    }

    /// The sizes this run will measure.
    pub fn schedule(&self) -> &SizeSchedule {
        &self.schedule
    }

    /// Size of the warm-up dataset for this run.
    pub fn warmup_size(&self) -> usize {
        self.schedule.first().max(WARMUP_FLOOR)
    }

    /// Number of samples a complete run produces.
    pub fn total_samples(&self) -> usize {
        self.schedule.len() * CaseKind::ALL.len() * Algorithm::ALL.len()
    }

    /// Execute the run to completion.
    pub fn run(self) -> Result<ResultStore, RunError> {
        self.run_with(|_| {})
    }

    /// Execute the run, notifying `observe` as it advances.
    ///
    /// The loop is single-threaded and strictly sequential: no size, case, or
    /// strategy is skipped, and every trial sorts a fresh copy of the case's
    /// dataset view. A panic inside a trial aborts the run with
    /// [`RunError::StrategyPanicked`].
    pub fn run_with<F>(self, mut observe: F) -> Result<ResultStore, RunError>
    where
        F: FnMut(RunEvent<'_>),
    {
        let warmup_size = self.warmup_size();
        let Self { schedule, mut rng } = self;
        let mut store = ResultStore::new();

        // Warm-up: every strategy once, untimed, to absorb one-time runtime
        // costs before the first measured size. Done once per run.
        observe(RunEvent::WarmupStarted { size: warmup_size });
        let warm = Dataset::generate(warmup_size, &mut rng);
        for algorithm in Algorithm::ALL {
            let mut copy = warm.view(CaseKind::Average).to_vec();
            algorithm.sort(&mut copy, &mut rng);
        }

        for &size in schedule.sizes() {
            observe(RunEvent::SizeStarted { size });

            // One dataset per size; all cases and strategies share its views
            let dataset = Dataset::generate(size, &mut rng);

            for case in CaseKind::ALL {
                let view = dataset.view(case);
                for algorithm in Algorithm::ALL {
                    let mean_ms = measure(algorithm, view, &mut rng)
                        .map_err(|message| RunError::StrategyPanicked {
                            algorithm,
                            size,
                            case,
                            message,
                        })?;

                    let sample = Sample {
                        algorithm,
                        size,
                        case,
                        mean_ms,
                    };
                    observe(RunEvent::SampleRecorded(&sample));
                    store.append(sample);
                }
            }
        }

        observe(RunEvent::Completed {
            total_samples: store.len(),
        });
        Ok(store)
    }
}

/// Run the repeated-trial loop for one combination and return the mean
/// elapsed time in milliseconds, or the panic message on failure.
fn measure<R: Rng>(algorithm: Algorithm, view: &[i32], rng: &mut R) -> Result<f64, String> {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut total_ns: u64 = 0;
        for _ in 0..REPETITIONS {
            // The sort mutates in place; reuse without copying would hand
            // later trials pre-sorted input
            let mut copy = view.to_vec();
            let timer = Timer::start();
            algorithm.sort(&mut copy, rng);
            total_ns += timer.stop();
        }
        total_ns
    }));

    match outcome {
        Ok(total_ns) => {
            let mean_ns = total_ns as f64 / REPETITIONS as f64;
            Ok(mean_ns / 1_000_000.0)
        }
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            Err(message)
        }
    }
}
