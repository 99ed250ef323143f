//! Error types emitted by the vibe CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use vibe_scorer::{MatchThresholdError, RouletteError};

/// Errors emitted by the vibe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The match threshold lies outside `0.0..=1.0`.
    #[error("invalid --threshold: {0}")]
    InvalidThreshold(#[from] MatchThresholdError),
    /// Opening the candidates file failed.
    #[error("failed to open candidates at {path:?}: {source}")]
    OpenCandidates {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Candidates JSON could not be decoded.
    #[error("failed to parse candidates JSON at {path:?}: {source}")]
    ParseCandidates {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the roulette options file failed.
    #[error("failed to open roulette options at {path:?}: {source}")]
    OpenOptions {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Roulette options JSON could not be decoded.
    #[error("failed to parse roulette options JSON at {path:?}: {source}")]
    ParseOptions {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The roulette options were unusable.
    #[error(transparent)]
    Roulette(#[from] RouletteError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
