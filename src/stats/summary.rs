//! Daily Summary
//! The four daily aggregates of one table, bundled for reporting.

use super::{daily_max, daily_mean, daily_min, daily_std};
use crate::data::Table;
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub mean: Vec<f64>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub std: Vec<f64>,
}

impl DailySummary {
    pub fn days(&self) -> usize {
        self.mean.len()
    }

    /// (mean, min, max, std) for a single day.
    pub fn day(&self, day: usize) -> Option<(f64, f64, f64, f64)> {
        Some((
            *self.mean.get(day)?,
            *self.min.get(day)?,
            *self.max.get(day)?,
            *self.std.get(day)?,
        ))
    }
}

/// Compute every daily aggregate; fails if any entry is negative.
pub fn daily_summary(table: &Table) -> Result<DailySummary> {
    Ok(DailySummary {
        mean: daily_mean(table)?,
        min: daily_min(table)?,
        max: daily_max(table)?,
        std: daily_std(table)?,
    })
}
