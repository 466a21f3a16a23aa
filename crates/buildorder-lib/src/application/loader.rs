//! Configuration loading
//!
//! Coordinates `.env` files, environment variables and command line parsing.

use crate::primitives::{ColorIntent, ConfigError};
use clap::Parser;

use super::{cli::Cli, cli::CliConfig, env::EnvironmentConfig};

/// Files consulted for extra environment variables, first match wins per key
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` files into the process environment; missing files are skipped
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(())
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        // .env must be loaded before clap reads `env = ...` fallbacks
        load_env_files()?;
        let env_config = EnvironmentConfig::load()?;
        Self::from_cli(Cli::parse(), &env_config)
    }

    /// Combine parsed arguments with standard environment variables and validate
    pub fn from_cli(cli: Cli, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut app_config = cli.config;

        // An explicit --color always/never beats NO_COLOR and friends
        if app_config.color == ColorIntent::Auto {
            app_config.color = env_config.apply_color_config(app_config.color);
        }

        app_config.validate()?;

        Ok(Self {
            app_config,
            command: cli.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
