use buildorder_lib::application::config::AppConfig;
use buildorder_lib::application::env::EnvironmentConfig;
use buildorder_lib::application::{Cli, CliConfig, Commands};
use buildorder_lib::primitives::{ColorIntent, ConfigError, LogLevel, LogOutput};
use clap::Parser;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.graph.is_none());
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_cli_config_from_parsed_arguments() {
    let cli = Cli::try_parse_from(["buildorder", "--log-level", "4", "version"]).unwrap();
    let config = CliConfig::from_cli(cli, &EnvironmentConfig::default()).unwrap();

    assert_eq!(config.command, Some(Commands::Version));
    assert_eq!(config.app_config.to_logger_config().level, LogLevel::Trace);
}

#[test]
fn test_ci_disables_color_for_auto() {
    let cli = Cli::try_parse_from(["buildorder"]).unwrap();
    let env = EnvironmentConfig {
        ci: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };

    let config = CliConfig::from_cli(cli, &env).unwrap();
    assert_eq!(config.app_config.color, ColorIntent::Never);
    assert!(!config.app_config.to_logger_config().color);
}

#[test]
fn test_invalid_log_format_string() {
    let err = "xml".parse::<buildorder_lib::primitives::LogFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
