pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{ManifestBuilder, TestWorkspace};
