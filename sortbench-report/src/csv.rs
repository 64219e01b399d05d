//! CSV Output
//!
//! Two flavors mirror the external-plotting workflow: one consolidated file
//! with every sample, and one file per algorithm for tools that chart a single
//! strategy's scaling curve.

use crate::report::Report;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the consolidated export.
pub const CONSOLIDATED_FILE_NAME: &str = "results.csv";

/// Render the consolidated CSV: header plus one row per sample.
pub fn consolidated_csv(report: &Report) -> String {
    let mut out = String::from("size,algorithm,case,mean_ms\n");
    for record in &report.samples {
        out.push_str(&format!(
            "{},{},{},{:.6}\n",
            record.size,
            record.algorithm,
            record.case.label(),
            record.mean_ms
        ));
    }
    out
}

/// Render one CSV per algorithm, keyed by file name
/// (`results_<algorithm>.csv`, header `size,case,mean_ms`).
pub fn per_algorithm_csvs(report: &Report) -> Vec<(String, String)> {
    let mut files: BTreeMap<&str, String> = BTreeMap::new();
    for record in &report.samples {
        let body = files
            .entry(record.algorithm.as_str())
            .or_insert_with(|| String::from("size,case,mean_ms\n"));
        body.push_str(&format!(
            "{},{},{:.6}\n",
            record.size,
            record.case.label(),
            record.mean_ms
        ));
    }

    files
        .into_iter()
        .map(|(algorithm, body)| (format!("results_{}.csv", algorithm), body))
        .collect()
}

/// Write the consolidated file and the per-algorithm set into `dir`,
/// creating it if needed. Returns the written paths.
pub fn write_csv_files(report: &Report, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let consolidated = dir.join(CONSOLIDATED_FILE_NAME);
    let mut file = std::fs::File::create(&consolidated)?;
    file.write_all(consolidated_csv(report).as_bytes())?;
    written.push(consolidated);

    for (name, body) in per_algorithm_csvs(report) {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path)?;
        file.write_all(body.as_bytes())?;
        written.push(path);
    }

    Ok(written)
}
