//! Error types emitted by the Sweetspot CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Sweetspot CLI.
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
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
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
    /// Opening an input file failed.
    #[error("failed to open {field} at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The preference JSON could not be decoded.
    #[error("failed to parse preferences JSON at {path:?}: {source}")]
    ParsePreferences {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The scoring weights JSON could not be decoded.
    #[error("failed to parse weights JSON at {path:?}: {source}")]
    ParseWeights {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The scoring weights decoded but were rejected.
    #[error("invalid scoring weights at {path:?}: {source}")]
    InvalidWeights {
        path: Utf8PathBuf,
        #[source]
        source: sweetspot_scorer::ScoreWeightsError,
    },
    /// Serialising the recommendation failed.
    #[error("failed to serialise recommendation: {0}")]
    SerialiseRecommendation(#[source] serde_json::Error),
    /// Writing the recommendation failed.
    #[error("failed to write recommendation: {0}")]
    WriteOutput(#[source] std::io::Error),
}
