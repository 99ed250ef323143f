//! Rank command implementation for the vibe CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use vibe_core::{ScoredCandidate, VibeProfile};
use vibe_scorer::{
    MatchThreshold, ScoreTier, SeededJitter, VibeMatcher, filter_candidates, meter_pips, percent,
};

use crate::fs::{open_utf8_file, require_existing};
use crate::{
    ARG_CANDIDATES, ARG_QUERY, ARG_SEED, ARG_THRESHOLD, ARG_VIBE, CliError, ENV_CANDIDATES,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate in a JSON array of profiles against \
                 your vibe and print them best-first. Each candidate needs a \
                 `vibe` and a `distance` such as \"0.4mi\".",
    about = "Rank candidates by vibe compatibility"
)]
#[ortho_config(prefix = "VIBE")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of candidate profiles.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Your current vibe, e.g. "Nightlife Coffee".
    #[arg(long = ARG_VIBE, value_name = "text")]
    #[serde(default)]
    pub(crate) vibe: Option<String>,
    /// Score a candidate must exceed to count as a match.
    #[arg(long = ARG_THRESHOLD, value_name = "score")]
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    /// Seed for reproducible tie-breaking jitter.
    #[arg(long = ARG_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Only rank candidates whose name or vibe contains this text.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON candidates file.
    pub(crate) candidates: Utf8PathBuf,
    /// Visitor vibe; empty when not supplied.
    pub(crate) vibe: String,
    pub(crate) threshold: MatchThreshold,
    /// `None` draws jitter from system entropy.
    pub(crate) seed: Option<u64>,
    /// Search text; empty keeps every candidate.
    pub(crate) query: String,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_CANDIDATES,
        })?;
        let threshold = args
            .threshold
            .map(MatchThreshold::new)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            candidates,
            vibe: args.vibe.unwrap_or_default(),
            threshold,
            seed: args.seed,
            query: args.query.unwrap_or_default(),
        })
    }
}

/// One line of `rank` output.
#[derive(Debug, Serialize)]
struct RankedRow<'a> {
    candidate: &'a VibeProfile,
    score: f64,
    matched: bool,
    tier: ScoreTier,
    percent: u8,
    pips: u8,
}

impl<'a> From<&'a ScoredCandidate> for RankedRow<'a> {
    fn from(scored: &'a ScoredCandidate) -> Self {
        Self {
            candidate: &scored.candidate,
            score: scored.score,
            matched: scored.matched,
            tier: ScoreTier::of(scored.score),
            percent: percent(scored.score),
            pips: meter_pips(scored.score),
        }
    }
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.candidates, ARG_CANDIDATES)?;
    run_rank_with(&config, writer)
}

pub(crate) fn run_rank_with(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let candidates = filter_candidates(&config.query, &load_candidates(&config.candidates)?);
    let ranked = rank(config, &candidates);
    log::info!(
        "ranked {} candidates from {}; {} matched",
        ranked.len(),
        config.candidates,
        ranked.iter().filter(|scored| scored.matched).count()
    );
    write_ranking(writer, &ranked)
}

fn rank(config: &RankConfig, candidates: &[VibeProfile]) -> Vec<ScoredCandidate> {
    let matcher = VibeMatcher::default().with_threshold(config.threshold);
    let mut jitter = config
        .seed
        .map_or_else(SeededJitter::from_entropy, SeededJitter::seeded);
    matcher.rank(&config.vibe, candidates, &mut jitter)
}

/// Loads a JSON array of [`VibeProfile`]s from disk.
pub(crate) fn load_candidates(path: &Utf8Path) -> Result<Vec<VibeProfile>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCandidates {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCandidates {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranking(writer: &mut dyn Write, ranked: &[ScoredCandidate]) -> Result<(), CliError> {
    let rows: Vec<RankedRow<'_>> = ranked.iter().map(RankedRow::from).collect();
    let payload = serde_json::to_string_pretty(&rows).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
