//! Command-line interface for ranking carers.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;
use rank::{RankArgs, run_rank};

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const DEFAULT_INPUT: &str = "data.csv";
pub(crate) const DEFAULT_OUTPUT: &str = "export.csv";

/// Run the carer ranking CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "carer-rank",
    about = "Score carers and list the most desirable first",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the carers in a delimited file and export them by score.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
