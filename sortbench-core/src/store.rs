//! Result Storage
//!
//! The append-only collection of aggregated samples produced by one benchmark
//! run. The store is constructed and owned by whoever orchestrates the run and
//! handed read-only to reporting; there is no global instance.

use crate::algorithm::Algorithm;
use crate::dataset::CaseKind;
use serde::{Deserialize, Serialize};

/// One aggregated measurement for a (strategy, size, case) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// The strategy that was measured.
    pub algorithm: Algorithm,
    /// Array size sorted in each trial.
    pub size: usize,
    /// Which dataset view the trials sorted.
    pub case: CaseKind,
    /// Arithmetic mean over all trials, in milliseconds.
    pub mean_ms: f64,
}

/// Append-only, ordered collection of [`Sample`]s for one run.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    samples: Vec<Sample>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample. Existing entries are never mutated.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Read-only view of all samples in insertion order.
    pub fn all(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the store holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Remove all samples, e.g. between reused runs.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Consume the store, yielding the samples.
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(algorithm: Algorithm, size: usize) -> Sample {
        Sample {
            algorithm,
            size,
            case: CaseKind::Average,
            mean_ms: 0.5,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = ResultStore::new();
        store.append(sample(Algorithm::Bubble, 100));
        store.append(sample(Algorithm::Quick, 200));

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].algorithm, Algorithm::Bubble);
        assert_eq!(store.all()[1].size, 200);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = ResultStore::new();
        store.append(sample(Algorithm::Merge, 50));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_sample_serializes_with_stable_names() {
        let json = serde_json::to_string(&sample(Algorithm::Insertion, 10)).unwrap();
        assert!(json.contains("\"insertion\""));
        assert!(json.contains("\"average\""));
    }
}
