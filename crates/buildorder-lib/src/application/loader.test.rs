use super::*;
use crate::application::cli::Commands;
use std::fs;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("buildorder").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_environment_applies_to_auto_color() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = CliConfig::from_cli(parse(&[]), &env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
}

#[test]
fn test_explicit_color_flag_wins() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = CliConfig::from_cli(parse(&["--color", "always"]), &env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Always);
}

#[test]
fn test_missing_graph_fails_validation() {
    let err = CliConfig::from_cli(
        parse(&["--graph", "/no/such/graph.toml"]),
        &EnvironmentConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::GraphNotFound { .. }));
}

#[test]
fn test_existing_graph_passes_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.toml");
    fs::write(&path, "").unwrap();

    let config = CliConfig::from_cli(
        parse(&["check", "--graph", path.to_str().unwrap()]),
        &EnvironmentConfig::default(),
    )
    .unwrap();

    assert_eq!(config.app_config.graph, Some(path));
    assert_eq!(config.command, Some(Commands::Check));
}
