//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site descriptor toolkit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Descriptor file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the site descriptor
    #[command(visible_alias = "c")]
    Check,

    /// Print resolved configuration values as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Write a starter descriptor
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Restrict output to a single locale key
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Render the edit link for a document path (default locale unless --locale)
    #[arg(short, long, value_name = "DOC_PATH")]
    pub edit_link: Option<String>,

    /// Filter output to specific top-level fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
