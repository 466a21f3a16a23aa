use buildorder_lib::graph::{DependencyGraph, DependencyGraphError, Target};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Build an acyclic graph: target `i` may only list targets with a higher
/// index, plus phantom targets that are never registered.
fn acyclic_graph(raw: &[Vec<usize>]) -> DependencyGraph {
    let n = raw.len();
    let mut graph = DependencyGraph::new();

    for (i, picks) in raw.iter().enumerate() {
        let deps: Vec<Target> = picks
            .iter()
            .map(|&r| {
                let remaining = n - i - 1;
                if r % 5 == 0 || remaining == 0 {
                    format!("ghost{r}")
                } else {
                    format!("t{}", i + 1 + r % remaining)
                }
            })
            .collect();
        graph.register(format!("t{i}"), deps);
    }

    graph
}

fn graph_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0usize..64, 0..4), 0..12)
}

proptest! {
    #[test]
    fn acyclic_graphs_resolve_every_target_once(raw in graph_strategy()) {
        let graph = acyclic_graph(&raw);
        let order = graph.resolve_order().expect("acyclic graph resolves");

        prop_assert_eq!(order.len(), graph.len());
        let emitted: HashSet<&str> = order.iter().map(String::as_str).collect();
        let registered: HashSet<&str> = graph.targets().collect();
        prop_assert_eq!(emitted, registered);
    }

    #[test]
    fn targets_precede_their_registered_dependencies(raw in graph_strategy()) {
        let graph = acyclic_graph(&raw);
        let order = graph.resolve_order().expect("acyclic graph resolves");
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        for target in graph.targets() {
            for dep in graph.dependencies(target).unwrap_or_default() {
                if graph.contains(&dep) {
                    prop_assert!(position[target] < position[dep.as_str()]);
                }
            }
        }
    }

    #[test]
    fn resolution_is_idempotent(raw in graph_strategy()) {
        let graph = acyclic_graph(&raw);
        prop_assert_eq!(
            graph.resolve_order().unwrap(),
            graph.resolve_order().unwrap()
        );
    }

    #[test]
    fn self_loop_always_detected(raw in graph_strategy(), pick in 0usize..12) {
        prop_assume!(!raw.is_empty());
        let mut graph = acyclic_graph(&raw);
        let looped = format!("t{}", pick % raw.len());

        let mut deps = graph.dependencies(&looped).unwrap_or_default();
        deps.push(looped.clone());
        graph.register(looped.clone(), deps);

        prop_assert!(graph.has_cycles());
        prop_assert!(graph.find_cycle().is_some());
        match graph.resolve_order() {
            Err(DependencyGraphError::CycleDetected { unresolved, .. }) => {
                prop_assert!(unresolved.contains(&looped));
            }
            other => prop_assert!(false, "expected CycleDetected, got {:?}", other),
        }
    }
}

#[test]
fn two_target_cycle_is_detected() {
    let mut graph = DependencyGraph::new();
    graph.register("A", ["B"]);
    graph.register("B", ["A"]);

    assert!(matches!(
        graph.resolve_order(),
        Err(DependencyGraphError::CycleDetected { .. })
    ));
}

#[test]
fn worked_example_order() {
    let mut graph = DependencyGraph::new();
    graph.register("A", ["B", "C"]);
    graph.register("B", ["D"]);
    graph.register("C", ["D", "E"]);
    graph.register("D", ["E"]);
    graph.register("E", Vec::<Target>::new());

    assert_eq!(graph.resolve_order().unwrap(), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn phantom_dependency_is_dropped() {
    let mut graph = DependencyGraph::new();
    graph.register("A", ["Z"]);

    assert_eq!(graph.resolve_order().unwrap(), vec!["A"]);
}
