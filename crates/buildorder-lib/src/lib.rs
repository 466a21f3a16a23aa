//! # buildorder Library
//!
//! Build target ordering with cycle detection.
//!
//! ## Core Modules
//!
//! - [`graph`] - Dependency graph, build order resolution and manifests
//! - [`primitives`] - Shared configuration types and errors
//! - [`logger`] - Structured logging
//! - [`application`] - CLI interface, configuration and command execution
//!
//! ## Quick Start
//!
//! ```
//! use buildorder_lib::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.register("app", ["lib"]);
//! graph.register("lib", Vec::<String>::new());
//!
//! assert_eq!(graph.resolve_order().unwrap(), vec!["app", "lib"]);
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, Commands, execute_command};
pub use graph::{DependencyGraph, DependencyGraphError, Target};
pub use logger::Logger;
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;

/// Entry point shared by the `buildorder` binary
pub fn main() -> Result<()> {
    let config = CliConfig::load()?;
    Logger::init(config.app_config.to_logger_config())?;

    execute_command(config)
}
