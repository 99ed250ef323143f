//! Command-line interface for ranking nearby vibes and spinning the
//! activity roulette.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;
mod spin;

pub use error::CliError;

use rank::{RankArgs, run_rank};
use spin::{SpinArgs, run_spin};

pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_VIBE: &str = "vibe";
pub(crate) const ARG_THRESHOLD: &str = "threshold";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_OPTIONS: &str = "options";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ENV_CANDIDATES: &str = "VIBE_CMDS_RANK_CANDIDATES";

/// Run the vibe CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => run_rank(args, &mut stdout),
        Command::Spin(args) => run_spin(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vibe",
    about = "Rank nearby people by vibe compatibility",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a JSON list of candidates against your vibe.
    Rank(RankArgs),
    /// Let the roulette pick an activity.
    Spin(SpinArgs),
}

#[cfg(test)]
mod tests;
