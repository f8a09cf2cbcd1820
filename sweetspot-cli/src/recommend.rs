//! Recommend command implementation for the Sweetspot CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};
use sweetspot_core::{
    CafeEntity, RawPreferences, RecommendRequest, Recommendation, Recommender, TopK,
};
use sweetspot_scorer::{ScoreWeights, WeightedScorer};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_CATALOG, ARG_PREFERENCES, ARG_TOP_K, ARG_WEIGHTS, CliError, ENV_CATALOG, ENV_PREFERENCES,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the cafes of a JSON catalog snapshot against a JSON \
                 preference payload. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Recommend cafes for a preference payload"
)]
#[ortho_config(prefix = "SWEETSPOT")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the preference payload.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON array of catalog cafes.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Maximum number of cafes to print (default 5).
    #[arg(long = ARG_TOP_K, value_name = "n", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) top_k: Option<f64>,
    /// Path to a JSON object overriding individual scoring weights.
    #[arg(long = ARG_WEIGHTS, value_name = "path")]
    #[serde(default)]
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the preference payload.
    pub(crate) preferences: Utf8PathBuf,
    /// Path to the catalog snapshot.
    pub(crate) catalog: Utf8PathBuf,
    /// Result limit.
    pub(crate) top_k: TopK,
    /// Optional scoring weight overrides; defaults apply when absent.
    pub(crate) weights: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences, ARG_PREFERENCES)?;
        Self::require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(weights) = &self.weights {
            Self::require_existing(weights, ARG_WEIGHTS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_PREFERENCES,
        })?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        let top_k = args.top_k.map_or(TopK::DEFAULT, TopK::from_requested);
        Ok(Self {
            preferences,
            catalog,
            top_k,
            weights: args.weights,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let recommendation = execute_recommend(&config)?;
    write_recommendation(writer, &recommendation)
}

pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Recommendation, CliError> {
    config.validate_sources()?;
    let catalog = load_catalog(&config.catalog)?;
    let preferences = load_preferences(&config.preferences)?;
    let scorer = build_scorer(config.weights.as_deref())?;
    log::debug!(
        "loaded {} cafes from {}; ranking top {}",
        catalog.len(),
        config.catalog,
        config.top_k.get()
    );
    let request = RecommendRequest::from_raw(&preferences).with_top_k(config.top_k);
    Ok(Recommender::new(scorer).recommend(&catalog, &request))
}

fn build_scorer(weights: Option<&Utf8Path>) -> Result<WeightedScorer, CliError> {
    let Some(path) = weights else {
        return Ok(WeightedScorer::new());
    };
    let overrides = load_weights(path)?;
    WeightedScorer::with_weights(overrides).map_err(|source| CliError::InvalidWeights {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON array of cafes from disk.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<CafeEntity>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_CATALOG,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON preference payload from disk.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<RawPreferences, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_PREFERENCES,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePreferences {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads scoring weight overrides from disk. Omitted weights keep their
/// defaults.
pub(crate) fn load_weights(path: &Utf8Path) -> Result<ScoreWeights, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field: ARG_WEIGHTS,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseWeights {
        path: path.to_path_buf(),
        source,
    })
}

fn write_recommendation(
    writer: &mut dyn Write,
    recommendation: &Recommendation,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(recommendation)
        .map_err(CliError::SerialiseRecommendation)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
