use super::*;
use crate::primitives::{ColorIntent, LogFormat};
use std::path::PathBuf;

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand() {
    let cli = Cli::try_parse_from(["buildorder"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.command.unwrap_or_default(), Commands::default());
}

#[test]
fn test_resolve_with_options() {
    let cli = Cli::try_parse_from([
        "buildorder",
        "resolve",
        "--format",
        "json",
        "--prerequisites-first",
        "--graph",
        "targets.toml",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Some(Commands::Resolve {
            format: OutputFormat::Json,
            prerequisites_first: true,
        })
    );
    assert_eq!(cli.config.graph, Some(PathBuf::from("targets.toml")));
}

#[test]
fn test_global_logging_flags() {
    let cli = Cli::try_parse_from([
        "buildorder",
        "--log-format",
        "yml",
        "--color",
        "off",
        "check",
    ])
    .unwrap();

    assert_eq!(cli.command, Some(Commands::Check));
    assert_eq!(cli.config.log_format, LogFormat::Yaml);
    assert_eq!(cli.config.color, ColorIntent::Never);
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["buildorder", "resolve", "--format", "xml"]).is_err());
}
