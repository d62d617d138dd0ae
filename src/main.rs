//! docsite - documentation site descriptor toolkit.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docsite::cli::{self, Cli, Commands};
use docsite::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir } => cli::init::run_init(dir.as_deref(), &cli.config),
        Commands::Check => {
            let path = cli::common::resolve_descriptor(&cli.config)?;
            cli::check::run_check(&path)
        }
        Commands::Query { args } => {
            let path = cli::common::resolve_descriptor(&cli.config)?;
            cli::query::run_query(args, &path)
        }
    }
}
