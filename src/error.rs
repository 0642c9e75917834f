//! Error Module
//! Error kinds raised while loading and summarising inflammation tables.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a genuine numeric table.
    #[error("TypeMismatch: {0}")]
    TypeMismatch(String),
    /// The input does not have exactly two non-empty dimensions, or is ragged.
    #[error("ShapeError: {0}")]
    Shape(String),
    /// A value violates a domain constraint.
    #[error("RangeError: {0}")]
    Range(String),
    #[error("IndexError: patient index {index} out of range for {patients} patients")]
    IndexOutOfRange { index: usize, patients: usize },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

impl Error {
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch(_))
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, Error::Shape(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Range("values should be >= 0".to_string());
        assert_eq!(err.to_string(), "RangeError: values should be >= 0");

        let err = Error::Shape("table has no rows".to_string());
        assert_eq!(err.to_string(), "ShapeError: table has no rows");

        let err = Error::IndexOutOfRange {
            index: 4,
            patients: 3,
        };
        assert_eq!(
            err.to_string(),
            "IndexError: patient index 4 out of range for 3 patients"
        );
    }

    #[test]
    fn test_error_kind_predicates() {
        assert!(Error::TypeMismatch(String::new()).is_type_mismatch());
        assert!(Error::Shape(String::new()).is_shape());
        assert!(Error::Range(String::new()).is_range());
        assert!(!Error::Range(String::new()).is_shape());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
