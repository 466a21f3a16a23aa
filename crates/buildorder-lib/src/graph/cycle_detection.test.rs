// Tests for dependency cycle detection

use super::*;

fn graph_of(entries: &[(&str, &[&str])]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (target, deps) in entries {
        graph.register(*target, deps.iter().copied());
    }
    graph
}

// ============================================================================
// Cycle Detection Tests
// ============================================================================

#[test]
fn test_detect_simple_cycle_two_nodes() {
    let graph = graph_of(&[("A", &["B"]), ("B", &["A"])]);

    assert!(graph.has_cycles(), "Should detect cycle in A -> B -> A");

    let err = graph.resolve_order().unwrap_err();
    assert!(matches!(err, DependencyGraphError::CycleDetected { .. }));
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = graph_of(&[("X", &["X"])]);

    assert!(graph.has_cycles());
    match graph.resolve_order() {
        Err(DependencyGraphError::CycleDetected {
            resolved,
            unresolved,
        }) => {
            assert!(resolved.is_empty());
            assert_eq!(unresolved, vec!["X"]);
        }
        other => panic!("Expected CycleDetected, got {:?}", other),
    }
    assert_eq!(graph.find_cycle(), Some(vec!["X".to_string(), "X".to_string()]));
}

#[test]
fn test_cycle_reports_partial_order() {
    // root is fine, the rest loops back on itself
    let graph = graph_of(&[
        ("root", &["a"]),
        ("a", &["b"]),
        ("b", &["c"]),
        ("c", &["a"]),
        ("other", &[]),
    ]);

    match graph.resolve_order() {
        Err(DependencyGraphError::CycleDetected {
            resolved,
            unresolved,
        }) => {
            assert_eq!(resolved, vec!["root", "other"]);
            assert_eq!(unresolved, vec!["a", "b", "c"]);
        }
        other => panic!("Expected CycleDetected, got {:?}", other),
    }
}

#[test]
fn test_find_cycle_path() {
    let graph = graph_of(&[
        ("root", &["a"]),
        ("a", &["b"]),
        ("b", &["c"]),
        ("c", &["a"]),
    ]);

    assert_eq!(
        graph.find_cycle().unwrap(),
        vec!["a", "b", "c", "a"],
        "Cycle path should start and end at the re-entered target"
    );
}

#[test]
fn test_no_cycle_in_acyclic_graph() {
    let graph = DependencyGraph::sample();

    assert!(!graph.has_cycles());
    assert!(graph.find_cycle().is_none());
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let graph = graph_of(&[
        ("top", &["left", "right"]),
        ("left", &["bottom"]),
        ("right", &["bottom"]),
        ("bottom", &[]),
    ]);

    assert!(!graph.has_cycles());
    assert!(graph.find_cycle().is_none());
    assert_eq!(
        graph.resolve_order().unwrap(),
        vec!["top", "left", "right", "bottom"]
    );
}

#[test]
fn test_cycle_broken_by_reregistration() {
    let mut graph = graph_of(&[("A", &["B"]), ("B", &["A"])]);
    assert!(graph.resolve_order().is_err());

    graph.register("B", Vec::<Target>::new());

    assert!(!graph.has_cycles());
    assert_eq!(graph.resolve_order().unwrap(), vec!["A", "B"]);
}

#[test]
fn test_cycle_error_message() {
    let graph = graph_of(&[("A", &["B"]), ("B", &["A"])]);
    let err = graph.resolve_order().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cyclic dependency detected. Build cannot be resolved."
    );
}

#[test]
fn test_cycle_through_phantom_is_impossible() {
    // Z never gets registered, so nothing can loop through it
    let graph = graph_of(&[("A", &["Z"]), ("B", &["Z", "A"])]);

    assert!(!graph.has_cycles());
    assert_eq!(graph.resolve_order().unwrap(), vec!["B", "A"]);
}

// ============================================================================
// Deep Graphs
// ============================================================================

/// Chain `t0 -> t1 -> ... -> t{len-1}`, optionally closed back to `t0`
fn chain(len: usize, closed: bool) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for i in 0..len {
        let next = if i + 1 < len {
            vec![format!("t{}", i + 1)]
        } else if closed {
            vec!["t0".to_string()]
        } else {
            Vec::new()
        };
        graph.register(format!("t{i}"), next);
    }
    graph
}

#[test]
fn test_find_cycle_on_long_closed_chain() {
    let len = 200_000;
    let graph = chain(len, true);

    assert!(graph.resolve_order().is_err());
    assert!(graph.has_cycles());

    let cycle = graph.find_cycle().expect("closed chain is a cycle");
    assert_eq!(cycle.len(), len + 1);
    assert_eq!(cycle.first().map(String::as_str), Some("t0"));
    assert_eq!(cycle.last().map(String::as_str), Some("t0"));
}

#[test]
fn test_long_open_chain_has_no_cycle() {
    let len = 200_000;
    let graph = chain(len, false);

    assert!(!graph.has_cycles());
    assert!(graph.find_cycle().is_none());
    assert_eq!(graph.resolve_order().unwrap().len(), len);
}
