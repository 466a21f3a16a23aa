// Tests for dependency graph registration and build ordering

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Build a graph from `(target, deps)` pairs in the given order
fn graph_of(entries: &[(&str, &[&str])]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (target, deps) in entries {
        graph.register(*target, deps.iter().copied());
    }
    graph
}

/// Assert that every registered dependency comes after the target listing it
fn assert_order_valid(graph: &DependencyGraph, order: &[Target]) {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    for target in graph.targets() {
        for dep in graph.dependencies(target).unwrap() {
            if graph.contains(&dep) {
                assert!(
                    position[target] < position[dep.as_str()],
                    "{} should come before {} in {:?}",
                    target,
                    dep,
                    order
                );
            }
        }
    }
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_register_single_target() {
    let mut graph = DependencyGraph::new();
    graph.register("app", ["lib"]);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains("app"));
    // Listed but never registered
    assert!(!graph.contains("lib"));
}

#[test]
fn test_reregister_replaces_dependencies() {
    let mut graph = DependencyGraph::new();
    graph.register("app", ["lib", "util"]);
    graph.register("app", ["core"]);

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dependencies("app"), Some(vec!["core".to_string()]));
}

#[test]
fn test_reregister_keeps_registration_position() {
    let graph = graph_of(&[("a", &[]), ("b", &[]), ("a", &[])]);

    assert_eq!(graph.targets().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(graph.resolve_order().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_phantom_then_registered_target() {
    // "lib" exists as a phantom before it is registered
    let graph = graph_of(&[("app", &["lib"]), ("lib", &[])]);

    assert!(graph.contains("lib"));
    assert_eq!(graph.resolve_order().unwrap(), vec!["app", "lib"]);
}

#[test]
fn test_dependencies_keep_declaration_order() {
    let graph = graph_of(&[("app", &["zeta", "alpha", "mid"])]);

    assert_eq!(
        graph.dependencies("app").unwrap(),
        vec!["zeta", "alpha", "mid"]
    );
}

#[test]
fn test_dependencies_of_unregistered_target() {
    let graph = graph_of(&[("app", &["lib"])]);
    assert_eq!(graph.dependencies("lib"), None);
    assert_eq!(graph.dependencies("missing"), None);
}

#[test]
fn test_dependents() {
    let graph = graph_of(&[
        ("A", &["B", "C"]),
        ("B", &["D"]),
        ("C", &["D", "E"]),
        ("D", &["E"]),
        ("E", &[]),
    ]);

    assert_eq!(graph.dependents("D"), vec!["B", "C"]);
    assert_eq!(graph.dependents("E"), vec!["C", "D"]);
    assert!(graph.dependents("A").is_empty());
    assert!(graph.dependents("nope").is_empty());
}

// ============================================================================
// Build Order Resolution
// ============================================================================

#[test]
fn test_empty_graph_resolves_to_empty_order() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.resolve_order().unwrap(), Vec::<Target>::new());
}

#[test]
fn test_sample_graph_exact_order() {
    let graph = DependencyGraph::sample();
    assert_eq!(graph.resolve_order().unwrap(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_independent_targets_follow_registration_order() {
    let graph = graph_of(&[("c", &[]), ("a", &[]), ("b", &[])]);
    assert_eq!(graph.resolve_order().unwrap(), vec!["c", "a", "b"]);
}

#[test]
fn test_fifo_tie_break() {
    // root unblocks x and y together; x was listed first
    let graph = graph_of(&[
        ("y", &["z"]),
        ("x", &[]),
        ("root", &["x", "y"]),
        ("z", &[]),
    ]);

    assert_eq!(graph.resolve_order().unwrap(), vec!["root", "x", "y", "z"]);
}

#[test]
fn test_phantom_dependency_is_not_emitted() {
    let graph = graph_of(&[("A", &["Z"])]);
    assert_eq!(graph.resolve_order().unwrap(), vec!["A"]);
}

#[test]
fn test_phantom_shared_by_several_targets() {
    let graph = graph_of(&[("A", &["Z"]), ("B", &["Z"]), ("C", &["A"])]);
    assert_eq!(graph.resolve_order().unwrap(), vec!["B", "C", "A"]);
}

#[test]
fn test_duplicate_dependency_entries() {
    let graph = graph_of(&[("A", &["B", "B"]), ("B", &[])]);

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.resolve_order().unwrap(), vec!["A", "B"]);
}

#[test]
fn test_resolution_is_total_and_valid() {
    let graph = graph_of(&[
        ("release", &["package", "docs"]),
        ("package", &["compile", "assets"]),
        ("docs", &["compile"]),
        ("compile", &["codegen", "fetch"]),
        ("assets", &["fetch"]),
        ("codegen", &["fetch"]),
        ("fetch", &[]),
        ("lint", &["codegen"]),
    ]);

    let order = graph.resolve_order().unwrap();

    assert_eq!(order.len(), graph.len());
    let unique: HashSet<&Target> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
    for target in graph.targets() {
        assert!(order.iter().any(|t| t == target));
    }
    assert_order_valid(&graph, &order);
}

#[test]
fn test_resolution_is_idempotent() {
    let graph = DependencyGraph::sample();
    let first = graph.resolve_order().unwrap();
    let second = graph.resolve_order().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_prerequisite_order_is_reversed() {
    let graph = DependencyGraph::sample();
    assert_eq!(
        graph.prerequisite_order().unwrap(),
        vec!["E", "D", "C", "B", "A"]
    );
}

#[test]
fn test_empty_identifier_is_an_ordinary_target() {
    let graph = graph_of(&[("", &["x"]), ("x", &[])]);
    assert_eq!(graph.resolve_order().unwrap(), vec!["", "x"]);
}
