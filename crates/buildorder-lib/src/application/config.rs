//! Application configuration
//!
//! Values come from, in increasing precedence: defaults, `.env` files,
//! environment variables and command line flags.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }

    #[cfg(test)]
    pub fn defaults_match() -> bool {
        use super::defaults;
        use std::str::FromStr;

        defaults::LOG_LEVEL.parse::<u8>().ok() == Some(log_level())
            && LogFormat::from_str(defaults::LOG_FORMAT).ok() == Some(log_format())
            && LogOutput::from_str(defaults::LOG_OUTPUT).ok() == Some(log_output())
            && ColorIntent::from_str(defaults::COLOR).ok() == Some(color())
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Graph manifest (TOML) to resolve instead of the built-in sample graph
    #[arg(short, long, global = true, env = "BUILDORDER_GRAPH")]
    #[serde(default)]
    pub graph: Option<PathBuf>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, global = true, env = "BUILDORDER_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, global = true, env = "BUILDORDER_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, global = true, env = "BUILDORDER_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, global = true, env = "BUILDORDER_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graph: None,
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig, resolving the color intent against the log stream
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color.enabled_for(self.log_output),
        }
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.graph {
            if !path.is_file() {
                return Err(ConfigError::GraphNotFound {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants_match_default_fns() {
        assert!(default_fns::defaults_match());
    }

    #[test]
    fn test_validate_missing_graph() {
        let config = AppConfig {
            graph: Some(PathBuf::from("/definitely/not/here.toml")),
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Graph manifest not found: /definitely/not/here.toml"
        );
    }

    #[test]
    fn test_validate_without_graph() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_logger_config_from_app_config() {
        let config = AppConfig {
            log_level: 3,
            log_format: LogFormat::Json,
            color: ColorIntent::Never,
            ..AppConfig::default()
        };

        let logger_config = config.to_logger_config();
        assert_eq!(logger_config.level, LogLevel::Debug);
        assert_eq!(logger_config.format, LogFormat::Json);
        assert_eq!(logger_config.output, LogOutput::Stderr);
        assert!(!logger_config.color);
    }
}
