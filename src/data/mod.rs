//! Data module - inflammation table and CSV loading

mod loader;
mod table;

pub use loader::{load_csv, DataLoader, DEFAULT_UPPER_BOUND};
pub use table::Table;
