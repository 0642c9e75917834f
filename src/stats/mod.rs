//! Stats module - per-day aggregates, patient normalisation and thresholds

mod daily;
mod normalise;
mod summary;
mod threshold;

pub use daily::{daily_max, daily_mean, daily_min, daily_std};
pub use normalise::patient_normalise;
pub use summary::{daily_summary, DailySummary};
pub use threshold::daily_above_threshold;

use crate::data::Table;
use crate::error::{Error, Result};

/// Every statistic re-checks its input, since a table need not come from the loader.
fn ensure_non_negative(table: &Table) -> Result<()> {
    if table.any(|v| v < 0.0) {
        return Err(Error::Range(
            "Sane inflammation values should be >= 0".into(),
        ));
    }
    Ok(())
}
