//! Full analysis of an authentication log export.
//!
//! # Usage
//!
//! ```bash
//! # Analyze an export, writing charts under static/plots
//! authlog analyze signin_logs.csv
//!
//! # Compressed exports work directly
//! authlog analyze signin_logs.csv.gz
//!
//! # Keep the full result record for another tool
//! authlog analyze signin_logs.csv --output analysis.json
//! ```
//!
//! # Output
//!
//! Prints a sectioned report: summary counts and resolved columns, top
//! source addresses with spray scores, event-code breakdown, top
//! targeted identities, and the chart files written. With `--output`,
//! the complete analysis record is also serialized to JSON.

use crate::analysis;
use crate::analysis::types::AnalysisResult;
use crate::utils::format::format_number;
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

pub fn run(csv_file: &str, plots_dir: &str, output: Option<&str>) -> Result<()> {
    eprintln!("Analyzing authentication log export: {csv_file}\n");

    let result = analysis::analyze_file(csv_file, Path::new(plots_dir))?;

    print_report(&result);

    if let Some(output_path) = output {
        let file = File::create(output_path)
            .with_context(|| format!("Failed to create output file: {output_path}"))?;
        serde_json::to_writer_pretty(file, &result)
            .with_context(|| format!("Failed to write analysis result to {output_path}"))?;
        eprintln!("\nAnalysis result written to {output_path}");
    }

    Ok(())
}

fn optional_count(value: Option<usize>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_number)
}

fn resolved(column: &Option<String>) -> &str {
    column.as_deref().unwrap_or("(not found)")
}

fn print_report(result: &AnalysisResult) {
    println!("{}", "=".repeat(100));
    println!("Authentication Log Analysis");
    println!("{}", "=".repeat(100));

    // 1. Summary
    println!("\n1. Summary");
    println!("{}", "-".repeat(100));
    println!("{:<28} {}", "Total events:", format_number(result.total_events));
    println!(
        "{:<28} {}",
        "Unique source addresses:",
        optional_count(result.unique_addresses)
    );
    println!(
        "{:<28} {}",
        "Unique identities:",
        optional_count(result.unique_identities)
    );
    println!("{:<28} {}", "Address column:", resolved(&result.address_column));
    println!("{:<28} {}", "Identity column:", resolved(&result.identity_column));
    println!("{:<28} {}", "Time column:", resolved(&result.time_column));

    // 2. Top source addresses
    println!("\n2. Top Source Addresses");
    println!("{}", "-".repeat(100));
    if result.top_addresses.is_empty() {
        println!("(skipped: no address column resolved or no usable rows)");
    } else {
        println!(
            "{:<40} {:>12} {:>20} {:>14}",
            "Address", "Attempts", "Unique Identities", "Spray Score"
        );
        println!("{}", "-".repeat(100));
        for row in &result.top_addresses {
            println!(
                "{:<40} {:>12} {:>20} {:>14.3}",
                row.address,
                format_number(row.attempts),
                format_number(row.unique_identities),
                row.spray_score
            );
        }
    }

    // 3. Event code breakdown
    println!("\n3. Event Code Breakdown");
    println!("{}", "-".repeat(100));
    match &result.event_code_counts {
        Some(counts) => {
            println!("{:<30} {:>12}", "EventID", "Count");
            println!("{}", "-".repeat(100));
            for row in counts {
                println!("{:<30} {:>12}", row.code, format_number(row.count));
            }
        }
        None => println!("(skipped: no EventID column)"),
    }

    // 4. Top targeted identities
    println!("\n4. Top Targeted Identities");
    println!("{}", "-".repeat(100));
    if result.top_identities.is_empty() {
        println!("(skipped: no identity column resolved or no usable rows)");
    } else {
        println!("{:<50} {:>12}", "Identity", "Attempts");
        println!("{}", "-".repeat(100));
        for row in &result.top_identities {
            println!("{:<50} {:>12}", row.identity, format_number(row.attempts));
        }
    }

    // 5. Charts
    println!("\n5. Charts");
    println!("{}", "-".repeat(100));
    let charts: Vec<&String> = [
        &result.address_chart,
        &result.time_chart,
        &result.event_code_chart,
        &result.identity_chart,
    ]
    .into_iter()
    .flatten()
    .collect();
    if charts.is_empty() {
        println!("(no charts rendered)");
    } else {
        for reference in charts {
            println!("{reference}");
        }
    }

    println!("{}", "=".repeat(100));
}
