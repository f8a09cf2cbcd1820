//! Focused unit tests covering recommend configuration, input loading and
//! output.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::recommend::{
    RecommendConfig, config_from_layers_for_test, execute_recommend, load_catalog,
    load_preferences, load_weights, run_recommend_with,
};
use crate::{ARG_CATALOG, ARG_PREFERENCES, ARG_WEIGHTS, ENV_CATALOG, ENV_PREFERENCES};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use sweetspot_core::TopK;
use sweetspot_scorer::{ScoreWeights, ScoreWeightsError};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(workspace: &Workspace) -> RecommendConfig {
    RecommendConfig {
        preferences: workspace.preferences.clone(),
        catalog: workspace.catalog.clone(),
        top_k: TopK::DEFAULT,
        weights: None,
    }
}

#[rstest]
#[case::preferences(None, Some("catalog.json"), ARG_PREFERENCES, ENV_PREFERENCES)]
#[case::catalog(Some("prefs.json"), None, ARG_CATALOG, ENV_CATALOG)]
fn converting_without_inputs_errors(
    #[case] preferences: Option<&str>,
    #[case] catalog: Option<&str>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = RecommendArgs {
        preferences: preferences.map(Utf8PathBuf::from),
        catalog: catalog.map(Utf8PathBuf::from),
        top_k: None,
        weights: None,
    };

    let err = RecommendConfig::try_from(args).expect_err("missing input should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case(None, 5)]
#[case(Some(3.0), 3)]
#[case(Some(2.9), 2)]
#[case(Some(0.0), 1)]
#[case(Some(-4.0), 1)]
fn top_k_is_clamped(#[case] requested: Option<f64>, #[case] expected: usize) {
    let args = RecommendArgs {
        preferences: Some(Utf8PathBuf::from("prefs.json")),
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        top_k: requested,
        weights: None,
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.top_k.get(), expected);
}

#[rstest]
fn cli_parses_recommend_arguments() {
    let cli = Cli::try_parse_from([
        "sweetspot",
        "recommend",
        "prefs.json",
        "--catalog",
        "catalog.json",
        "--top-k",
        "-1",
    ])
    .expect("arguments should parse");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.preferences, Some(Utf8PathBuf::from("prefs.json")));
    assert_eq!(args.catalog, Some(Utf8PathBuf::from("catalog.json")));
    assert_eq!(args.top_k, Some(-1.0));
    assert_eq!(args.weights, None);
}

#[rstest]
fn cli_parses_weights_path() {
    let cli = Cli::try_parse_from([
        "sweetspot",
        "recommend",
        "prefs.json",
        "--catalog",
        "catalog.json",
        "--weights",
        "weights.json",
    ])
    .expect("arguments should parse");
    let Command::Recommend(args) = cli.command;
    assert_eq!(args.weights, Some(Utf8PathBuf::from("weights.json")));
}

#[rstest]
fn validate_sources_reports_missing_preferences(workspace: Workspace) {
    let err = config_for(&workspace)
        .validate_sources()
        .expect_err("missing preferences should error");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PREFERENCES);
            assert_eq!(path, workspace.preferences);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories(workspace: Workspace) {
    workspace.write_preferences("{}");
    let config = RecommendConfig {
        catalog: workspace.root.clone(),
        ..config_for(&workspace)
    };
    let err = config
        .validate_sources()
        .expect_err("directory catalog should error");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_catalog_reads_lenient_rows(workspace: Workspace) {
    let catalog = load_catalog(&workspace.catalog).expect("catalog should load");
    let ids: Vec<&str> = catalog.iter().map(|cafe| cafe.id()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert!(catalog.iter().any(|cafe| cafe.photo_spot()));
}

#[rstest]
fn load_catalog_reports_invalid_json(workspace: Workspace) {
    write_utf8(&workspace.catalog, b"{ not json");
    let err = load_catalog(&workspace.catalog).expect_err("invalid JSON should error");
    match err {
        CliError::ParseCatalog { path, .. } => assert_eq!(path, workspace.catalog),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_reports_invalid_json(workspace: Workspace) {
    workspace.write_preferences("[1, 2");
    let err = load_preferences(&workspace.preferences).expect_err("invalid JSON should error");
    match err {
        CliError::ParsePreferences { path, .. } => assert_eq!(path, workspace.preferences),
        other => panic!("expected ParsePreferences, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_reports_missing_file(workspace: Workspace) {
    let err = load_preferences(&workspace.preferences).expect_err("missing file should error");
    match err {
        CliError::OpenInput { field, .. } => assert_eq!(field, ARG_PREFERENCES),
        other => panic!("expected OpenInput, found {other:?}"),
    }
}

#[rstest]
#[case(r#"{"region": "gwangju", "required": "주차 가능"}"#, &["1"])]
#[case(r#"{"region": ["광주"], "atmosphere": ["조용한"]}"#, &["1"])]
#[case(r#"{"menu": ["소금빵", "케이크"]}"#, &[])]
#[case(r#"{"atmosphere": "photo spot"}"#, &["2", "1", "3"])]
#[case(r#"{}"#, &[])]
fn execute_recommend_ranks_catalog(
    workspace: Workspace,
    #[case] preferences: &str,
    #[case] expected: &[&str],
) {
    workspace.write_preferences(preferences);
    let recommendation = execute_recommend(&config_for(&workspace)).expect("recommend");
    let ids: Vec<&str> = recommendation
        .results
        .iter()
        .map(|hit| hit.cafe().id())
        .collect();
    assert_eq!(ids, expected);
}

fn weighted_config(workspace: &Workspace) -> RecommendConfig {
    RecommendConfig {
        weights: Some(workspace.weights.clone()),
        ..config_for(workspace)
    }
}

#[rstest]
fn validate_sources_reports_missing_weights(workspace: Workspace) {
    workspace.write_preferences("{}");
    let err = weighted_config(&workspace)
        .validate_sources()
        .expect_err("missing weights should error");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_WEIGHTS);
            assert_eq!(path, workspace.weights);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn load_weights_keeps_defaults_for_omitted_fields(workspace: Workspace) {
    workspace.write_weights(r#"{"menu_bonus": 4.0}"#);
    let weights = load_weights(&workspace.weights).expect("weights should load");
    assert_eq!(weights.menu_bonus, 4.0);
    assert_eq!(weights.coffee_base, ScoreWeights::DEFAULT.coffee_base);
}

#[rstest]
fn custom_weights_change_the_ranking(workspace: Workspace) {
    workspace.write_preferences(r#"{"atmosphere": "photo spot"}"#);
    workspace.write_weights(r#"{"photo_spot": 0.0, "photo_synergy": 0.0, "popularity": 0.0}"#);
    let recommendation = execute_recommend(&weighted_config(&workspace)).expect("recommend");
    let ids: Vec<&str> = recommendation
        .results
        .iter()
        .map(|hit| hit.cafe().id())
        .collect();
    assert_eq!(ids, ["1", "3", "2"]);
}

#[rstest]
fn negative_weights_are_rejected(workspace: Workspace) {
    workspace.write_preferences(r#"{"region": "naju"}"#);
    workspace.write_weights(r#"{"menu_bonus": -1.0}"#);
    let err = execute_recommend(&weighted_config(&workspace)).expect_err("negative weight");
    match err {
        CliError::InvalidWeights { path, source } => {
            assert_eq!(path, workspace.weights);
            assert_eq!(
                source,
                ScoreWeightsError::Negative {
                    name: "menu_bonus",
                    value: -1.0,
                }
            );
        }
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
fn malformed_weights_are_reported(workspace: Workspace) {
    workspace.write_preferences(r#"{"region": "naju"}"#);
    workspace.write_weights(r#"{"menu_bonus": "lots"}"#);
    let err = execute_recommend(&weighted_config(&workspace)).expect_err("malformed weights");
    match err {
        CliError::ParseWeights { path, .. } => assert_eq!(path, workspace.weights),
        other => panic!("expected ParseWeights, found {other:?}"),
    }
}

#[rstest]
fn run_recommend_writes_pretty_json(workspace: Workspace) {
    workspace.write_preferences(r#"{"region": "naju"}"#);
    let args = RecommendArgs {
        preferences: Some(workspace.preferences.clone()),
        catalog: Some(workspace.catalog.clone()),
        top_k: Some(1.0),
        weights: None,
    };
    let mut buffer = Vec::new();
    run_recommend_with(args, &mut buffer).expect("command should succeed");

    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    assert!(stdout.ends_with("}\n"));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("output should be JSON");
    let first_id = value
        .get("results")
        .and_then(|results| results.get(0))
        .and_then(|hit| hit.get("id"))
        .and_then(serde_json::Value::as_str);
    assert_eq!(first_id, Some("3"));
    let catalog_size = value
        .get("diagnostics")
        .and_then(|diagnostics| diagnostics.get("catalog_size"))
        .and_then(serde_json::Value::as_u64);
    assert_eq!(catalog_size, Some(3));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "catalog": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "catalog": "from-file.json",
            "top_k": 7,
        }),
        None,
    );
    composer.push_environment(json!({
        "preferences": "from-env.json",
        "catalog": "from-env-catalog.json",
    }));
    composer.push_cli(json!({
        "catalog": "from-cli.json",
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.preferences, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.catalog, Utf8PathBuf::from("from-cli.json"));
    assert_eq!(config.top_k.get(), 7);
}
