//! Daily Statistics
//! Column-wise (per-day) reductions across all patients.

use super::ensure_non_negative;
use crate::data::Table;
use crate::error::Result;
use statrs::statistics::Statistics;

/// Reduce every day column with `reduce`.
fn per_day<F>(table: &Table, reduce: F) -> Result<Vec<f64>>
where
    F: Fn(&Table, usize) -> f64,
{
    ensure_non_negative(table)?;
    Ok((0..table.days()).map(|day| reduce(table, day)).collect())
}

/// Arithmetic mean of each day's measurements.
pub fn daily_mean(table: &Table) -> Result<Vec<f64>> {
    per_day(table, |t, day| Statistics::mean(t.column(day)))
}

/// Minimum of each day's measurements.
pub fn daily_min(table: &Table) -> Result<Vec<f64>> {
    per_day(table, |t, day| Statistics::min(t.column(day)))
}

/// Maximum of each day's measurements.
pub fn daily_max(table: &Table) -> Result<Vec<f64>> {
    per_day(table, |t, day| Statistics::max(t.column(day)))
}

/// Population standard deviation (denominator `n`) of each day's measurements.
pub fn daily_std(table: &Table) -> Result<Vec<f64>> {
    per_day(table, |t, day| Statistics::population_std_dev(t.column(day)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[f64]]) -> Table {
        Table::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_daily_mean_zeros() {
        let t = table(&[&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]]);
        assert_eq!(daily_mean(&t).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_integers() {
        let t = table(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_close(&daily_mean(&t).unwrap(), &[3.0, 4.0]);
    }

    #[test]
    fn test_daily_min() {
        let t = table(&[&[0.0, 0.0], &[0.0, 0.0], &[0.0, 0.0]]);
        assert_eq!(daily_min(&t).unwrap(), vec![0.0, 0.0]);

        let t = table(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(daily_min(&t).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_daily_max() {
        let t = table(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        assert_eq!(daily_max(&t).unwrap(), vec![5.0, 6.0]);

        let t = table(&[&[2.0, 1.0], &[4.0, 3.0], &[6.0, 5.0]]);
        assert_eq!(daily_max(&t).unwrap(), vec![6.0, 5.0]);
    }

    #[test]
    fn test_daily_std_uses_population_denominator() {
        let t = table(&[&[1.0, 2.0], &[3.0, 2.0], &[5.0, 2.0]]);
        // var = ((1-3)^2 + 0 + (5-3)^2) / 3
        assert_close(&daily_std(&t).unwrap(), &[(8.0f64 / 3.0).sqrt(), 0.0]);
    }

    #[test]
    fn test_negative_values_rejected() {
        let t = table(&[&[-1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
        for f in [daily_mean, daily_min, daily_max, daily_std] {
            let err = f(&t).unwrap_err();
            assert!(err.is_range());
            assert!(err.to_string().contains("Sane inflammation values should be >= 0"));
        }
    }

    #[test]
    fn test_empty_rows_give_nan() {
        let t = Table::from_shape_vec(0, 2, Vec::new()).unwrap();
        let mean = daily_mean(&t).unwrap();
        assert_eq!(mean.len(), 2);
        assert!(mean.iter().all(|m| m.is_nan()));
    }

    #[test]
    fn test_no_days_gives_empty_vector() {
        let t = Table::from_shape_vec(3, 0, Vec::new()).unwrap();
        assert!(daily_max(&t).unwrap().is_empty());
    }
}
