use super::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_MANIFEST: &str = r#"
[[target]]
name = "A"
deps = ["B", "C"]

[[target]]
name = "B"
deps = ["D"]

[[target]]
name = "C"
deps = ["D", "E"]

[[target]]
name = "D"
deps = ["E"]

[[target]]
name = "E"
"#;

#[test]
fn test_parse_manifest_entries() {
    let manifest = GraphManifest::from_toml_str(SAMPLE_MANIFEST).unwrap();

    assert_eq!(manifest.targets.len(), 5);
    assert_eq!(
        manifest.targets[0],
        TargetEntry {
            name: "A".to_string(),
            deps: vec!["B".to_string(), "C".to_string()],
        }
    );
    // deps omitted
    assert!(manifest.targets[4].deps.is_empty());
}

#[test]
fn test_manifest_graph_matches_sample() {
    let graph = DependencyGraph::from_manifest_str(SAMPLE_MANIFEST).unwrap();

    assert_eq!(
        graph.resolve_order().unwrap(),
        DependencyGraph::sample().resolve_order().unwrap()
    );
}

#[test]
fn test_empty_manifest_is_empty_graph() {
    let graph = DependencyGraph::from_manifest_str("").unwrap();
    assert!(graph.is_empty());
    assert!(graph.resolve_order().unwrap().is_empty());
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let err = DependencyGraph::from_manifest_str("[[target]\nname = ").unwrap_err();
    assert!(matches!(err, DependencyGraphError::TomlParseError { .. }));
}

#[test]
fn test_missing_name_is_parse_error() {
    let err = DependencyGraph::from_manifest_str("[[target]]\ndeps = [\"x\"]\n").unwrap_err();
    assert!(matches!(err, DependencyGraphError::TomlParseError { .. }));
}

#[test]
fn test_from_manifest_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("targets.toml");
    fs::write(&path, SAMPLE_MANIFEST).unwrap();

    let graph = DependencyGraph::from_manifest_file(&path).unwrap();
    assert_eq!(graph.len(), 5);
    assert_eq!(graph.resolve_order().unwrap(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_missing_file_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    match DependencyGraph::from_manifest_file(&path) {
        Err(DependencyGraphError::FileReadError { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("Expected FileReadError, got {:?}", other.map(|g| g.len())),
    }
}
