//! Spin command implementation for the vibe CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use vibe_scorer::Roulette;

use crate::fs::{open_utf8_file, require_existing};
use crate::{ARG_OPTIONS, ARG_SEED, CliError};

/// CLI arguments for the `spin` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Pick an activity at random. The built-in wheel is used \
                 unless --options points at a JSON array of strings.",
    about = "Spin the activity roulette"
)]
#[ortho_config(prefix = "VIBE")]
pub(crate) struct SpinArgs {
    /// Path to a JSON array of activity names.
    #[arg(long = ARG_OPTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) options: Option<Utf8PathBuf>,
    /// Seed for a reproducible spin.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl SpinArgs {
    pub(crate) fn into_config(self) -> Result<SpinConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SpinConfig::from(merged))
    }
}

/// Resolved `spin` command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SpinConfig {
    /// Custom wheel; `None` uses the built-in options.
    pub(crate) options: Option<Utf8PathBuf>,
    pub(crate) seed: Option<u64>,
}

impl From<SpinArgs> for SpinConfig {
    fn from(args: SpinArgs) -> Self {
        Self {
            options: args.options,
            seed: args.seed,
        }
    }
}

pub(crate) fn run_spin(args: SpinArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    if let Some(path) = &config.options {
        require_existing(path, ARG_OPTIONS)?;
    }
    run_spin_with(&config, writer)
}

pub(crate) fn run_spin_with(config: &SpinConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let wheel = match &config.options {
        Some(path) => Roulette::new(load_options(path)?)?,
        None => Roulette::default(),
    };
    let mut rng = config
        .seed
        .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    let pick = wheel.spin(&mut rng);
    log::debug!("roulette landed on {pick:?} of {} options", wheel.options().len());
    writeln!(writer, "{pick}").map_err(CliError::WriteOutput)
}

/// Loads a JSON array of roulette options from disk.
pub(crate) fn load_options(path: &Utf8Path) -> Result<Vec<String>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOptions {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseOptions {
        path: path.to_path_buf(),
        source,
    })
}
