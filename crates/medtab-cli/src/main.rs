//! medtab CLI entry point.

use clap::Parser;

use medtab_cli::cli::{Cli, Command};
use medtab_cli::logging::init_logging;
use medtab_cli::pipeline::{run_clean, run_demo, run_generate};

fn main() {
    let cli = Cli::parse();
    init_logging(
        cli.verbosity.tracing_level_filter(),
        cli.verbosity.is_present(),
    );

    let result = match cli.command {
        Command::Generate(args) => run_generate(&args).map(|_| ()),
        Command::Clean(args) => run_clean(&args).map(|_| ()),
        Command::Demo(args) => run_demo(&args).map(|_| ()),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
