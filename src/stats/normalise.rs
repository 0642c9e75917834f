//! Patient Normaliser
//! Rescales every patient row by its own maximum.

use super::ensure_non_negative;
use crate::data::Table;
use crate::error::Result;
use tracing::warn;

/// Largest defined value in a row; NaN if the row has no defined value.
fn nan_max(row: &[f64]) -> f64 {
    row.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, f64::max)
}

/// Divide each row by its maximum, ignoring NaN when finding the maximum.
///
/// Undefined quotients (0/0, or a row with no defined value) become 0, as
/// does any negative result. No rounding is applied.
pub fn patient_normalise(table: &Table) -> Result<Table> {
    ensure_non_negative(table)?;

    let mut values = Vec::with_capacity(table.values().len());
    for (patient, row) in table.rows().enumerate() {
        let max = nan_max(row);
        if max.is_nan() || max <= 0.0 {
            warn!(patient, "row has no positive value, normalising to zeros");
        }

        values.extend(row.iter().map(|&v| {
            let scaled = v / max;
            if scaled.is_nan() || scaled < 0.0 {
                0.0
            } else {
                scaled
            }
        }));
    }

    Table::from_shape_vec(table.patients(), table.days(), values)
}
