//! Run Errors
//!
//! A failure inside a trial invalidates the whole (size, case, strategy)
//! combination; the runner surfaces it instead of recording a fabricated
//! sample.

use crate::algorithm::Algorithm;
use crate::dataset::CaseKind;
use thiserror::Error;

/// Error produced while executing a benchmark run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A strategy panicked during a trial; the run is aborted.
    #[error("{algorithm} panicked on the {case} case at size {size}: {message}")]
    StrategyPanicked {
        /// The strategy that panicked.
        algorithm: Algorithm,
        /// Array size of the failing combination.
        size: usize,
        /// Case kind of the failing combination.
        case: CaseKind,
        /// Panic payload, when it carried a message.
        message: String,
    },
}
