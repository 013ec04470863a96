mod cli;
mod commands;
mod config;
mod output;
mod render;
mod timing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::output::Output;

fn main() -> ExitCode {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Output::stderr().error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            source,
            style,
            wide,
        } => commands::run_render(&source, style, wide, &Config::load()?),
        Commands::Check { source } => commands::run_check(&source, &Config::load()?),
        Commands::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }
    }
}
