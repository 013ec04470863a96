use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::render::TableStyle;

#[derive(Parser)]
#[command(name = "gigboard")]
#[command(about = "Render and check field-typed tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render rows as a table
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Table border style
        #[arg(long, short = 's', value_enum)]
        style: Option<TableStyle>,

        /// Show full text instead of truncated cells
        #[arg(long, short = 'w')]
        wide: bool,
    },
    /// Validate field descriptors and, optionally, rows against them
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON array of field descriptors
    #[arg(long, short = 'f', env = "GIGBOARD_FIELDS_PATH")]
    pub fields: PathBuf,

    /// JSON array of rows; `-` reads stdin
    #[arg(long, short = 'r')]
    pub rows: Option<PathBuf>,

    /// Row key holding the unique id
    #[arg(long, short = 'k', env = "GIGBOARD_UNIQUE_ID")]
    pub unique_id: Option<String>,
}
