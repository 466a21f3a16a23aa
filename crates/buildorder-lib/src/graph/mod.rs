//! # Graph Module
//!
//! Build target graph and build order resolution.
//!
//! ## Modules
//!
//! - [`dependency_graph`] - Build ordering with cycle detection
//! - [`manifest`] - TOML graph manifests

pub mod dependency_graph;
pub mod manifest;

pub use dependency_graph::{DependencyGraph, DependencyGraphError, Target};
pub use manifest::{GraphManifest, TargetEntry};
