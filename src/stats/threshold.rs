//! Threshold Counter

use crate::data::Table;
use crate::error::{Error, Result};

/// Number of days on which a patient's inflammation strictly exceeds `threshold`.
pub fn daily_above_threshold(table: &Table, patient_index: usize, threshold: f64) -> Result<usize> {
    let row = table.row(patient_index).ok_or(Error::IndexOutOfRange {
        index: patient_index,
        patients: table.patients(),
    })?;

    Ok(row.iter().filter(|&&v| v > threshold).count())
}
