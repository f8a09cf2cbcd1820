//! Command-line interface for the Sweetspot recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod recommend;

pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

const ARG_PREFERENCES: &str = "preferences";
const ARG_CATALOG: &str = "catalog";
const ARG_TOP_K: &str = "top-k";
const ARG_WEIGHTS: &str = "weights";
const ENV_PREFERENCES: &str = "SWEETSPOT_CMDS_RECOMMEND_PREFERENCES";
const ENV_CATALOG: &str = "SWEETSPOT_CMDS_RECOMMEND_CATALOG";

/// Run the Sweetspot CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, inputs cannot be read or
/// decoded, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sweetspot",
    about = "Recommend dessert cafes from a catalog snapshot",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog cafes against a preference payload.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
