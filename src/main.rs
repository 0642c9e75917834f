//! Inflammation - command-line front end
//!
//! Loads each input file and prints its daily summary.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use inflammation::cli::Cli;
use inflammation::{daily_above_threshold, daily_summary, patient_normalise};
use inflammation::{DailySummary, DataLoader, Table};

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    patients: usize,
    days: usize,
    summary: DailySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalised: Option<Table>,
    #[serde(skip_serializing_if = "Option::is_none")]
    above_threshold: Option<ThresholdReport>,
}

#[derive(Debug, Serialize)]
struct ThresholdReport {
    patient: usize,
    threshold: f64,
    days: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let loader = DataLoader::new().with_upper_bound(cli.upper_bound);

    let mut reports = Vec::with_capacity(cli.infiles.len());
    for path in &cli.infiles {
        reports.push(analyse(&loader, path, &cli)?);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

fn analyse(loader: &DataLoader, path: &Path, cli: &Cli) -> Result<FileReport> {
    let table = loader
        .load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let summary = daily_summary(&table)
        .with_context(|| format!("failed to summarise {}", path.display()))?;

    let normalised = if cli.normalise {
        Some(
            patient_normalise(&table)
                .with_context(|| format!("failed to normalise {}", path.display()))?,
        )
    } else {
        None
    };

    let above_threshold = match (cli.patient, cli.threshold) {
        (Some(patient), Some(threshold)) => Some(ThresholdReport {
            patient,
            threshold,
            days: daily_above_threshold(&table, patient, threshold).with_context(|| {
                format!("failed to count days above threshold in {}", path.display())
            })?,
        }),
        _ => None,
    };

    Ok(FileReport {
        file: path.display().to_string(),
        patients: table.patients(),
        days: table.days(),
        summary,
        normalised,
        above_threshold,
    })
}

fn print_report(report: &FileReport) {
    println!(
        "{}: {} patients x {} days",
        report.file, report.patients, report.days
    );
    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>10}",
        "day", "mean", "min", "max", "std"
    );
    for day in 0..report.summary.days() {
        if let Some((mean, min, max, std)) = report.summary.day(day) {
            println!(
                "{:>5} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
                day + 1,
                mean,
                min,
                max,
                std
            );
        }
    }

    if let Some(normalised) = &report.normalised {
        println!("normalised:");
        for row in normalised.rows() {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
            println!("  {}", cells.join(","));
        }
    }

    if let Some(t) = &report.above_threshold {
        println!(
            "patient {} above {}: {} days",
            t.patient, t.threshold, t.days
        );
    }
    println!();
}
