#![warn(missing_docs)]
//! Sortbench Report - Reporting and Export
//!
//! Turns the measurement core's samples into consumable output:
//! - Report data structures with run metadata (serde)
//! - CSV: one consolidated file plus one file per algorithm
//! - JSON (machine-readable)

mod csv;
mod json;
mod report;

pub use csv::{consolidated_csv, per_algorithm_csvs, write_csv_files, CONSOLIDATED_FILE_NAME};
pub use json::generate_json_report;
pub use report::{
    AlgorithmSummary, Report, ReportMeta, ReportSummary, RunConfig, SampleRecord, SystemInfo,
    SCHEMA_VERSION,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with full schema
    Json,
    /// Consolidated CSV
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Format a mean time for display, switching to microseconds below one
/// millisecond.
pub fn format_mean(mean_ms: f64) -> String {
    if mean_ms < 1.0 {
        format!("{:8.3} µs", mean_ms * 1000.0)
    } else {
        format!("{:8.3} ms", mean_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_mean_switches_units() {
        assert!(format_mean(0.012).contains("µs"));
        assert!(format_mean(0.012).contains("12.000"));
        assert!(format_mean(3.5).contains("ms"));
    }
}
