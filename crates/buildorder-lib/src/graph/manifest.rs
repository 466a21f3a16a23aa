//! TOML graph manifests
//!
//! A manifest lists targets as an array of tables, which keeps registration
//! order stable:
//!
//! ```toml
//! [[target]]
//! name = "A"
//! deps = ["B", "C"]
//!
//! [[target]]
//! name = "B"
//! ```

use super::dependency_graph::{DependencyGraph, DependencyGraphError, Target};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Origin recorded in parse errors for manifests that did not come from a file
const INLINE_ORIGIN: &str = "<inline>";

/// A single `[[target]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntry {
    pub name: Target,
    #[serde(default)]
    pub deps: Vec<Target>,
}

/// Parsed manifest contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphManifest {
    #[serde(default, rename = "target")]
    pub targets: Vec<TargetEntry>,
}

impl GraphManifest {
    fn parse(content: &str, origin: &Path) -> Result<Self, DependencyGraphError> {
        toml::from_str(content).map_err(|e| DependencyGraphError::TomlParseError {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Parse a manifest from a string
    pub fn from_toml_str(content: &str) -> Result<Self, DependencyGraphError> {
        Self::parse(content, Path::new(INLINE_ORIGIN))
    }

    /// Read and parse a manifest file
    pub fn from_file(path: &Path) -> Result<Self, DependencyGraphError> {
        trace!("Reading graph manifest: {}", path.display());

        let content =
            std::fs::read_to_string(path).map_err(|e| DependencyGraphError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse(&content, path)
    }

    /// Register every entry, in manifest order
    pub fn into_graph(self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for entry in self.targets {
            graph.register(entry.name, entry.deps);
        }
        debug!(
            targets = graph.len(),
            edges = graph.edge_count(),
            "Built dependency graph from manifest"
        );
        graph
    }
}

impl DependencyGraph {
    /// Build a graph from manifest text
    pub fn from_manifest_str(content: &str) -> Result<Self, DependencyGraphError> {
        Ok(GraphManifest::from_toml_str(content)?.into_graph())
    }

    /// Build a graph from a manifest file
    pub fn from_manifest_file(path: &Path) -> Result<Self, DependencyGraphError> {
        Ok(GraphManifest::from_file(path)?.into_graph())
    }
}

#[cfg(test)]
mod tests {
    include!("manifest.test.rs");
}
