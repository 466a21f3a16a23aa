use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// buildorder CLI - build target ordering
#[derive(Debug, Clone, Parser)]
#[command(name = "buildorder")]
#[command(about = "Compute a build order for targets and their dependencies")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// buildorder commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

/// Available buildorder commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Resolve and print the build order
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print listed dependencies before the targets that list them
        #[arg(long)]
        prerequisites_first: bool,
    },

    /// Check the graph for dependency cycles
    Check,

    /// Show version information
    Version,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Resolve {
            format: OutputFormat::Text,
            prerequisites_first: false,
        }
    }
}

/// Output format for the resolved order
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Header line followed by one target per line
    Text,
    /// JSON array of targets
    Json,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
