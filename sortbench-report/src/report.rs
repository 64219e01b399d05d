//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{CaseKind, Sample};
use std::collections::BTreeMap;

/// Version of the serialized report layout.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report: metadata, every sample, and the per-algorithm
/// summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run and system metadata.
    pub meta: ReportMeta,
    /// One record per (strategy, size, case), in measurement order.
    pub samples: Vec<SampleRecord>,
    /// Aggregated view across the whole run.
    pub summary: ReportSummary,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Serialized layout version.
    pub schema_version: u32,
    /// Crate version that produced the report.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Host the run executed on.
    pub system: SystemInfo,
    /// Run configuration captured for reproducibility.
    pub config: RunConfig,
}

/// Run configuration captured in report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Maximum size handed to the scheduler (before clamping).
    pub max_size: i64,
    /// Trials averaged per combination.
    pub repetitions: u32,
    /// Warm-up dataset size.
    pub warmup_size: usize,
    /// The scheduled sizes, ascending.
    pub sizes: Vec<usize>,
    /// RNG seed when the run was seeded; `None` for process-local entropy.
    pub seed: Option<u64>,
}

/// System information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name.
    pub os: String,
    /// Target architecture.
    pub arch: String,
    /// CPU model, when detectable.
    pub cpu: String,
    /// Available CPU cores.
    pub cpu_cores: u32,
    /// Total system memory in GB, 0.0 when unknown.
    pub memory_gb: f64,
}

/// One sample as it appears in reports and CSV rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Array size sorted in each trial.
    pub size: usize,
    /// Strategy name (`bubble`, `insertion`, ...).
    pub algorithm: String,
    /// Dataset view the trials sorted.
    pub case: CaseKind,
    /// Mean elapsed time in milliseconds.
    pub mean_ms: f64,
}

impl From<&Sample> for SampleRecord {
    fn from(sample: &Sample) -> Self {
        Self {
            size: sample.size,
            algorithm: sample.algorithm.name().to_string(),
            case: sample.case,
            mean_ms: sample.mean_ms,
        }
    }
}

/// Aggregates across the whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total samples in the report.
    pub total_samples: usize,
    /// Per-algorithm aggregates, sorted by algorithm name.
    pub algorithms: Vec<AlgorithmSummary>,
}

/// Mean across all of one algorithm's samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    /// Strategy name.
    pub algorithm: String,
    /// Number of samples for this strategy.
    pub samples: usize,
    /// Mean of the per-combination means, in milliseconds.
    pub mean_ms: f64,
}

impl Report {
    /// Assemble a report from the store's samples.
    pub fn build(meta: ReportMeta, samples: &[Sample]) -> Self {
        let records: Vec<SampleRecord> = samples.iter().map(SampleRecord::from).collect();

        let mut sums: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for record in &records {
            let entry = sums.entry(record.algorithm.as_str()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += record.mean_ms;
        }

        let algorithms = sums
            .iter()
            .map(|(algorithm, (count, total))| AlgorithmSummary {
                algorithm: algorithm.to_string(),
                samples: *count,
                mean_ms: total / (*count).max(1) as f64,
            })
            .collect();

        let summary = ReportSummary {
            total_samples: records.len(),
            algorithms,
        };

        Self {
            meta,
            samples: records,
            summary,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{dummy_meta, dummy_samples};
    use super::*;

    #[test]
    fn test_build_preserves_sample_order() {
        let samples = dummy_samples();
        let report = Report::build(dummy_meta(), &samples);

        assert_eq!(report.samples.len(), 30);
        assert_eq!(report.samples[0].size, 100);
        assert_eq!(report.samples[0].algorithm, "bubble");
        assert_eq!(report.summary.total_samples, 30);
    }

    #[test]
    fn test_summary_groups_by_algorithm() {
        let report = Report::build(dummy_meta(), &dummy_samples());

        assert_eq!(report.summary.algorithms.len(), 5);
        for entry in &report.summary.algorithms {
            // 2 sizes × 3 cases each
            assert_eq!(entry.samples, 6);
            // Means are (0.1 + 0.2) / 2 per case pair
            assert!((entry.mean_ms - 0.15).abs() < 1e-9);
        }
        let names: Vec<&str> = report
            .summary
            .algorithms
            .iter()
            .map(|a| a.algorithm.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "summary is sorted by algorithm name");
    }

    #[test]
    fn test_empty_run_builds_empty_report() {
        let report = Report::build(dummy_meta(), &[]);
        assert!(report.samples.is_empty());
        assert_eq!(report.summary.total_samples, 0);
        assert!(report.summary.algorithms.is_empty());
    }
}
