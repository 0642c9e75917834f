//! Inflammation - per-day statistics over patient inflammation tables
//!
//! Tables are loaded from header-less CSV files (one patient per row, one
//! day per column), validated, and summarised with stateless functions.

pub mod cli;
pub mod data;
pub mod error;
pub mod stats;

pub use data::{load_csv, DataLoader, Table};
pub use error::{Error, Result};
pub use stats::{
    daily_above_threshold, daily_max, daily_mean, daily_min, daily_std, daily_summary,
    patient_normalise, DailySummary,
};
