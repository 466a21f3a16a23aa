//! Command execution handlers
//!
//! Handlers write their output to a caller-provided writer so that the same
//! code path serves the binary (stdout) and in-process tests (a buffer).

use crate::application::cli::OutputFormat;
use crate::application::{AppConfig, CliConfig, Commands};
use crate::graph::{DependencyGraph, DependencyGraphError};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tracing::{debug, info};

/// Separator used when printing a cycle path
const CYCLE_ARROW: &str = " → ";

/// Execute a CLI command, writing results to stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let command = config.command.unwrap_or_default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command_with_writer(command, &config.app_config, &mut out)
}

/// Execute a specific command against a provided writer (for testing)
pub fn execute_command_with_writer<W: Write>(
    command: Commands,
    config: &AppConfig,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Resolve {
            format,
            prerequisites_first,
        } => handle_resolve(config, format, prerequisites_first, out),
        Commands::Check => handle_check(config, out),
        Commands::Version => handle_version(out),
    }
}

/// Load the configured manifest, or the built-in sample graph
fn load_graph(config: &AppConfig) -> Result<DependencyGraph> {
    match &config.graph {
        Some(path) => {
            info!("Loading graph manifest: {}", path.display());
            DependencyGraph::from_manifest_file(path)
                .with_context(|| format!("Failed to load graph from {}", path.display()))
        }
        None => {
            debug!("No graph manifest configured, using sample graph");
            Ok(DependencyGraph::sample())
        }
    }
}

fn handle_resolve<W: Write>(
    config: &AppConfig,
    format: OutputFormat,
    prerequisites_first: bool,
    out: &mut W,
) -> Result<()> {
    let graph = load_graph(config)?;

    let resolved = if prerequisites_first {
        graph.prerequisite_order()
    } else {
        graph.resolve_order()
    };

    let order = match resolved {
        Ok(order) => order,
        Err(err @ DependencyGraphError::CycleDetected { .. }) => {
            let error = anyhow::Error::new(err);
            return Err(match graph.find_cycle() {
                Some(cycle) => error.context(format!("Cycle: {}", cycle.join(CYCLE_ARROW))),
                None => error,
            });
        }
        Err(err) => return Err(err.into()),
    };

    info!(targets = order.len(), "Resolved build order");

    match format {
        OutputFormat::Text => {
            writeln!(out, "Build Order:")?;
            for target in &order {
                writeln!(out, "{}", target)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&order)?)?;
        }
    }

    Ok(())
}

fn handle_check<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let graph = load_graph(config)?;

    if let Some(cycle) = graph.find_cycle() {
        bail!("Cycle detected: {}", cycle.join(CYCLE_ARROW));
    }

    writeln!(
        out,
        "No cycles found ({} targets, {} dependencies)",
        graph.len(),
        graph.edge_count()
    )?;
    Ok(())
}

fn handle_version<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "buildorder {}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
