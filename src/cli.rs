use clap::Parser;
use std::path::PathBuf;

use crate::data::DEFAULT_UPPER_BOUND;

#[derive(Debug, Parser)]
#[command(
    name = "inflammation",
    version,
    about = "Per-day inflammation statistics for patient data files"
)]
pub struct Cli {
    #[arg(required = true, num_args = 1.., help = "Comma-separated data files, one patient per line")]
    pub infiles: Vec<PathBuf>,

    #[arg(long, default_value_t = false, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Also print each patient normalised by their maximum")]
    pub normalise: bool,

    #[arg(long, requires = "threshold", help = "Patient row (0-based) for --threshold")]
    pub patient: Option<usize>,

    #[arg(long, requires = "patient", help = "Count days on which the patient exceeds this value")]
    pub threshold: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, help = "Largest accepted inflammation value")]
    pub upper_bound: f64,
}
