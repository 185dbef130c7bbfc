//! Command orchestration: generate, clean, demo.
//!
//! The cleaning run is staged load → normalize → save → charts, with the
//! table handed linearly from stage to stage. The only fatal error is a
//! missing input file; per-cell problems are absorbed by the engine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use medtab_core::{clean_table, load_dataset, save_dataset};
use medtab_model::Table;
use medtab_report::render_all;
use medtab_synth::SyntheticDataGenerator;

use crate::cli::{CleanArgs, DemoArgs, GenerateArgs};

/// Generates the raw dataset; returns the written file path.
pub fn run_generate(args: &GenerateArgs) -> Result<PathBuf> {
    let span = info_span!("generate", n_records = args.n_records);
    let _guard = span.enter();

    let mut generator = match args.seed {
        Some(seed) => SyntheticDataGenerator::with_seed(args.n_records, &args.output_dir, seed),
        None => SyntheticDataGenerator::new(args.n_records, &args.output_dir),
    }?;
    generator.write_dataset()
}

/// Loads, normalizes, saves, and charts a raw dataset.
pub fn run_clean(args: &CleanArgs) -> Result<Table> {
    clean_dataset(&args.input_file, &args.output_file, &args.plot_dir)
}

/// Generate-then-clean under one working directory.
pub fn run_demo(args: &DemoArgs) -> Result<Table> {
    let raw_dir = args.dir.join("data");
    let generate_args = GenerateArgs {
        n_records: args.n_records,
        output_dir: raw_dir,
        seed: args.seed,
    };
    let raw_path = run_generate(&generate_args)?;
    clean_dataset(
        &raw_path,
        &args.dir.join("cleaned_data").join("cleaned_data.csv"),
        &args.dir.join("cleaned_data").join("plots"),
    )
}

fn clean_dataset(input_file: &Path, output_file: &Path, plot_dir: &Path) -> Result<Table> {
    let span = info_span!("clean", input = %input_file.display());
    let _guard = span.enter();

    let mut table = load_dataset(input_file)
        .with_context(|| format!("loading dataset {}", input_file.display()))?;
    let raw_rows = table.height();

    clean_table(&mut table).context("running cleaning pipeline")?;
    info!(
        raw_rows,
        clean_rows = table.height(),
        dropped = raw_rows - table.height(),
        "normalization finished"
    );

    save_dataset(&table, output_file)
        .with_context(|| format!("saving dataset {}", output_file.display()))?;
    render_all(&table, plot_dir).context("rendering summary charts")?;

    Ok(table)
}
