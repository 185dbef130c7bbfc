//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "medtab",
    version,
    about = "Synthesize messy medical visit datasets and normalize them",
    long_about = "Generate a deliberately inconsistent synthetic medical dataset,\n\
                  then clean it into an analysis-ready canonical table with\n\
                  summary charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a raw synthetic dataset.
    Generate(GenerateArgs),

    /// Normalize a raw dataset into the canonical table and render charts.
    Clean(CleanArgs),

    /// Generate and clean in one run.
    Demo(DemoArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of patient records to generate (50 duplicates are appended).
    #[arg(long = "n-records", value_name = "N", default_value_t = 1000)]
    pub n_records: usize,

    /// Directory for the generated dataset.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "data")]
    pub output_dir: PathBuf,

    /// RNG seed for reproducible output.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw dataset.
    #[arg(
        long = "input",
        value_name = "FILE",
        default_value = "data/complex_medical_data.csv"
    )]
    pub input_file: PathBuf,

    /// Path for the cleaned dataset.
    #[arg(
        long = "output",
        value_name = "FILE",
        default_value = "cleaned_data/cleaned_data.csv"
    )]
    pub output_file: PathBuf,

    /// Directory for the summary charts (created if absent).
    #[arg(
        long = "plot-dir",
        value_name = "DIR",
        default_value = "cleaned_data/plots"
    )]
    pub plot_dir: PathBuf,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Working directory for the demo run.
    #[arg(value_name = "DIR", default_value = "demo")]
    pub dir: PathBuf,

    /// Number of patient records to generate.
    #[arg(long = "n-records", value_name = "N", default_value_t = 1000)]
    pub n_records: usize,

    /// RNG seed for reproducible output.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,
}
