//! Inflammation Table
//! Rectangular patients x days table of measurements, stored row-major.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};

/// Rows are patients, columns are days.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    patients: usize,
    days: usize,
    values: Vec<f64>,
}

impl Table {
    /// Build a table from patient rows.
    ///
    /// Only the shape is checked here; value ranges are validated by the
    /// loader and re-checked by each statistic.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let patients = rows.len();
        let days = rows.first().map_or(0, Vec::len);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != days) {
            return Err(Error::Shape(format!(
                "row {} has {} values, expected {}",
                i + 1,
                row.len(),
                days
            )));
        }

        Ok(Self {
            patients,
            days,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a table from row-major values.
    pub fn from_shape_vec(patients: usize, days: usize, values: Vec<f64>) -> Result<Self> {
        if patients.checked_mul(days) != Some(values.len()) {
            return Err(Error::Shape(format!(
                "{} values cannot fill a {}x{} table",
                values.len(),
                patients,
                days
            )));
        }
        Ok(Self {
            patients,
            days,
            values,
        })
    }

    pub fn patients(&self) -> usize {
        self.patients
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// (patients, days)
    pub fn shape(&self) -> (usize, usize) {
        (self.patients, self.days)
    }

    /// Row-major view of every entry.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, patient: usize, day: usize) -> Option<f64> {
        if patient < self.patients && day < self.days {
            Some(self.values[patient * self.days + day])
        } else {
            None
        }
    }

    /// Measurements of a single patient.
    pub fn row(&self, patient: usize) -> Option<&[f64]> {
        if patient < self.patients {
            let start = patient * self.days;
            Some(&self.values[start..start + self.days])
        } else {
            None
        }
    }

    /// Iterate over patient rows.
    ///
    /// A table with patients but no days yields one empty slice per patient.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.patients).map(move |i| {
            let start = i * self.days;
            &self.values[start..start + self.days]
        })
    }

    /// Iterate over one day's measurements across all patients.
    ///
    /// Empty when `day` is out of range.
    pub fn column(&self, day: usize) -> impl Iterator<Item = &f64> + '_ {
        let len = if day < self.days { self.patients } else { 0 };
        self.values
            .iter()
            .skip(day)
            .step_by(self.days.max(1))
            .take(len)
    }

    /// True if any entry satisfies `pred`.
    pub fn any(&self, pred: impl Fn(f64) -> bool) -> bool {
        self.values.iter().any(|&v| pred(v))
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
