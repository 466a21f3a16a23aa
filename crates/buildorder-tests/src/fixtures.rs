//! Fixture infrastructure for end-to-end tests
//!
//! Builds graph manifests on disk and runs commands in-process, capturing
//! their output.

use anyhow::{Context, Result};
use buildorder_lib::application::{AppConfig, Commands, execute_command_with_writer};
use buildorder_lib::graph::{GraphManifest, TargetEntry};
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for `[[target]]` manifest text
#[derive(Debug, Default, Clone)]
pub struct ManifestBuilder {
    manifest: GraphManifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target with its dependency list
    pub fn target(mut self, name: &str, deps: &[&str]) -> Self {
        self.manifest.targets.push(TargetEntry {
            name: name.to_string(),
            deps: deps.iter().map(|d| d.to_string()).collect(),
        });
        self
    }

    /// Serialize the manifest as TOML
    pub fn build(self) -> Result<String> {
        toml::to_string(&self.manifest).context("Failed to serialize graph manifest")
    }
}

/// Temporary directory holding a manifest, plus a config pointing at it
pub struct TestWorkspace {
    _dir: TempDir,
    pub manifest_path: PathBuf,
    pub config: AppConfig,
}

/// Captured result of an in-process command run
#[derive(Debug)]
pub struct CommandOutput {
    pub result: Result<()>,
    pub stdout: String,
}

impl TestWorkspace {
    /// Write `manifest` into a fresh temporary directory
    pub fn with_manifest(manifest: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        let manifest_path = dir.path().join("targets.toml");
        std::fs::write(&manifest_path, manifest)
            .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

        let config = AppConfig {
            graph: Some(manifest_path.clone()),
            ..AppConfig::default()
        };
        config.validate()?;

        Ok(Self {
            _dir: dir,
            manifest_path,
            config,
        })
    }

    /// Run a command against this workspace's manifest
    pub fn run(&self, command: Commands) -> Result<CommandOutput> {
        let mut out = Vec::new();
        let result = execute_command_with_writer(command, &self.config, &mut out);
        Ok(CommandOutput {
            result,
            stdout: String::from_utf8(out).context("Command wrote non-UTF-8 output")?,
        })
    }

    /// Run `resolve` with JSON output and parse the order
    pub fn resolve_json(&self, prerequisites_first: bool) -> Result<Vec<String>> {
        let output = self.run(Commands::Resolve {
            format: buildorder_lib::application::OutputFormat::Json,
            prerequisites_first,
        })?;
        output.result?;
        serde_json::from_str(&output.stdout).context("Resolve output was not a JSON array")
    }
}
