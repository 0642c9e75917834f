//! CSV Data Loader Module
//! Reads header-less, comma-separated inflammation tables using Polars and
//! validates them before any statistic is computed.

use crate::data::Table;
use crate::error::{Error, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::debug;

/// Highest clinically plausible inflammation value.
pub const DEFAULT_UPPER_BOUND: f64 = 20.0;

/// Loads inflammation tables from delimited text files.
#[derive(Debug, Clone)]
pub struct DataLoader {
    delimiter: u8,
    upper_bound: f64,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_upper_bound(mut self, upper_bound: f64) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Load and validate a table, one patient per line.
    ///
    /// Checks run in order and the first failure aborts the load: every
    /// field numeric, non-empty 2D shape, no negatives, nothing above the
    /// upper bound, no NaN.
    pub fn load(&self, file_path: impl AsRef<Path>) -> Result<Table> {
        let file_path = file_path.as_ref();
        let df = self.read_frame(file_path)?;
        let table = Self::frame_to_table(&df)?;
        self.validate(&table)?;

        debug!(
            path = %file_path.display(),
            patients = table.patients(),
            days = table.days(),
            "loaded inflammation table"
        );
        Ok(table)
    }

    /// Every field is read as text; cells are parsed in `frame_to_table`.
    fn read_frame(&self, file_path: &Path) -> Result<DataFrame> {
        let is_empty_file = std::fs::metadata(file_path).is_ok_and(|m| m.len() == 0);
        if is_empty_file {
            return Err(Error::Shape(format!(
                "{} contains no rows",
                file_path.display()
            )));
        }

        let frame = LazyCsvReader::new(file_path)
            .with_has_header(false)
            .with_separator(self.delimiter)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lf| lf.collect());

        match frame {
            Ok(df) => Ok(df),
            Err(e) if is_no_data(&e) => Err(Error::Shape(format!(
                "{} contains no rows",
                file_path.display()
            ))),
            Err(e) => Err(Error::Csv(e)),
        }
    }

    fn frame_to_table(df: &DataFrame) -> Result<Table> {
        let (patients, days) = (df.height(), df.width());
        let mut values = vec![0.0; patients * days];
        for (day, column) in df.get_columns().iter().enumerate() {
            let cells = column.str().map_err(|_| {
                Error::TypeMismatch(format!("column {} was not read as text", day + 1))
            })?;

            for (patient, cell) in cells.into_iter().enumerate() {
                values[patient * days + day] = parse_cell(cell, patient, day)?;
            }
        }

        // A single row or column is a 1D series, not a patients x days table.
        if patients < 2 || days < 2 {
            return Err(Error::Shape(format!(
                "inflammation array should be 2D, got {patients}x{days}"
            )));
        }
        Table::from_shape_vec(patients, days, values)
    }

    fn validate(&self, table: &Table) -> Result<()> {
        if table.any(|v| v < 0.0) {
            return Err(Error::Range("inflammation values should be >= 0".into()));
        }
        if table.any(|v| v > self.upper_bound) {
            return Err(Error::Range(format!(
                "inflammation values should be <= {}",
                self.upper_bound
            )));
        }
        if table.any(f64::is_nan) {
            return Err(Error::Range(
                "inflammation values should not contain NaN".into(),
            ));
        }
        Ok(())
    }
}

/// Scan errors arrive wrapped in context layers.
fn is_no_data(err: &PolarsError) -> bool {
    match err {
        PolarsError::NoData(_) => true,
        PolarsError::Context { error, .. } => is_no_data(error),
        _ => false,
    }
}

fn parse_cell(cell: Option<&str>, patient: usize, day: usize) -> Result<f64> {
    let text = cell.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(Error::TypeMismatch(format!(
            "missing value at row {}, column {}",
            patient + 1,
            day + 1
        )));
    }
    text.parse::<f64>().map_err(|_| {
        Error::TypeMismatch(format!(
            "could not convert {:?} to a number at row {}, column {}",
            text,
            patient + 1,
            day + 1
        ))
    })
}

/// Load a table with the default comma delimiter and upper bound.
pub fn load_csv(file_path: impl AsRef<Path>) -> Result<Table> {
    DataLoader::default().load(file_path)
}
