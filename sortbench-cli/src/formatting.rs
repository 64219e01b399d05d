//! Output Formatting
//!
//! Human-readable terminal rendering: samples grouped by size with one row
//! per strategy (average/best/worst columns), followed by a per-algorithm
//! summary across the whole run.

use sortbench_core::CaseKind;
use sortbench_report::{format_mean, Report, SampleRecord};
use std::collections::BTreeMap;

/// Format a report for human-readable terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Sortbench Results\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "max size: {}  repetitions: {}  warm-up size: {}\n\n",
        report.meta.config.max_size, report.meta.config.repetitions, report.meta.config.warmup_size
    ));

    // Group rows by size, keeping measurement order within each group
    let mut by_size: BTreeMap<usize, Vec<&SampleRecord>> = BTreeMap::new();
    for record in &report.samples {
        by_size.entry(record.size).or_default().push(record);
    }

    for (size, records) in by_size {
        output.push_str(&format!("Size {}\n", size));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "  {:<12}{:>14}{:>14}{:>14}\n",
            "Algorithm", "Average", "Best", "Worst"
        ));

        // One row per algorithm with its three case means
        let mut rows: BTreeMap<&str, [Option<f64>; 3]> = BTreeMap::new();
        for record in records {
            let slot = match record.case {
                CaseKind::Average => 0,
                CaseKind::Best => 1,
                CaseKind::Worst => 2,
            };
            rows.entry(record.algorithm.as_str()).or_default()[slot] = Some(record.mean_ms);
        }

        for (algorithm, cases) in rows {
            output.push_str(&format!("  {:<12}", algorithm));
            for mean in cases {
                match mean {
                    Some(ms) => output.push_str(&format!("{:>14}", format_mean(ms))),
                    None => output.push_str(&format!("{:>14}", "-")),
                }
            }
            output.push('\n');
        }
        output.push('\n');
    }

    // Summary
    output.push_str("Summary (mean across all sizes and cases)\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for entry in &report.summary.algorithms {
        output.push_str(&format!(
            "  {:<12} samples: {:3}  mean: {}\n",
            entry.algorithm,
            entry.samples,
            format_mean(entry.mean_ms)
        ));
    }
    output.push_str(&format!(
        "  Total samples: {}\n",
        report.summary.total_samples
    ));

    output
}
