//! Dependency graph resolution with build ordering and cycle detection
//!
//! Targets are registered with an ordered list of dependencies. The resolver
//! builds a directed graph from those lists and computes a build order with
//! incoming-edge elimination (Kahn's algorithm) over a FIFO ready queue that
//! is seeded in registration order, so output is reproducible.
//!
//! ## Edge direction
//!
//! A target's listed dependencies are treated as downstream successors: every
//! target is emitted *before* the targets it lists. This is the reverse of the
//! usual "prerequisites build first" reading. Integrators that expect the
//! conventional order should call [`DependencyGraph::prerequisite_order`],
//! which reverses the resolved sequence without changing the algorithm.
//!
//! ## Phantom targets
//!
//! A dependency that is never registered as a target of its own takes part in
//! indegree bookkeeping but is never emitted, and never causes an error.

use petgraph::Direction;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Unique identifier of a build target
pub type Target = String;

/// Errors that can occur during build order resolution
#[derive(Debug, Error)]
pub enum DependencyGraphError {
    /// Not every registered target could be ordered.
    ///
    /// `resolved` holds the partial order reached before the queue ran dry and
    /// `unresolved` the registered targets that were never reached, in
    /// registration order. Neither is a valid build order.
    #[error("Cyclic dependency detected. Build cannot be resolved.")]
    CycleDetected {
        resolved: Vec<Target>,
        unresolved: Vec<Target>,
    },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {path}: {source}")]
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// A target in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TargetNode {
    /// Target identifier
    pub(crate) name: Target,
    /// Whether the target was registered, as opposed to only being listed as
    /// somebody's dependency
    pub(crate) registered: bool,
}

impl TargetNode {
    fn phantom(name: &str) -> Self {
        Self {
            name: name.to_string(),
            registered: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    OnStack,
    Done,
}

/// A node on the cycle search path and how far through its successors the
/// search has got
struct DfsFrame {
    node: NodeIndex,
    successors: Vec<NodeIndex>,
    cursor: usize,
}

impl DfsFrame {
    fn new(node: NodeIndex, successors: Vec<NodeIndex>) -> Self {
        Self {
            node,
            successors,
            cursor: 0,
        }
    }
}

/// Dependency graph resolver
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Directed graph: edges run from a target to each listed dependency,
    /// weighted by the dependency's position in that list
    graph: DiGraph<TargetNode, usize>,
    /// Map from target name to node index for fast lookup
    node_map: HashMap<Target, NodeIndex>,
    /// Registered targets in first-registration order
    registered: Vec<NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            registered: Vec::new(),
        }
    }

    /// The fixed sample graph used by the command line when no manifest is given
    pub fn sample() -> Self {
        let mut graph = Self::new();
        graph.register("A", ["B", "C"]);
        graph.register("B", ["D"]);
        graph.register("C", ["D", "E"]);
        graph.register("D", ["E"]);
        graph.register("E", Vec::<Target>::new());
        graph
    }

    fn node_index(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(TargetNode::phantom(name));
        self.node_map.insert(name.to_string(), idx);
        idx
    }

    /// Register `target` with its dependency list.
    ///
    /// Registering the same target again replaces its dependency list but
    /// keeps its original position in the registration order. Self-loops and
    /// unregistered dependencies are accepted as-is.
    pub fn register<T, I, D>(&mut self, target: T, dependencies: I)
    where
        T: Into<Target>,
        I: IntoIterator<Item = D>,
        D: Into<Target>,
    {
        let target = target.into();
        let idx = self.node_index(&target);

        if self.graph[idx].registered {
            trace!(name = %target, "Replacing dependency list");
            while let Some(edge) = self.graph.first_edge(idx, Direction::Outgoing) {
                self.graph.remove_edge(edge);
            }
        } else {
            self.graph[idx].registered = true;
            self.registered.push(idx);
        }

        for (position, dependency) in dependencies.into_iter().enumerate() {
            let dependency = dependency.into();
            let dep_idx = self.node_index(&dependency);
            self.graph.add_edge(idx, dep_idx, position);
        }

        trace!(
            name = %target,
            dependencies = self.graph.edges_directed(idx, Direction::Outgoing).count(),
            "Registered target"
        );
    }

    /// Listed dependencies of a node, in declaration order
    fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (*edge.weight(), edge.target()))
            .collect();
        edges.sort_unstable_by_key(|&(position, _)| position);
        edges.into_iter().map(|(_, target)| target).collect()
    }

    fn names(&self, indices: impl IntoIterator<Item = NodeIndex>) -> Vec<Target> {
        indices
            .into_iter()
            .map(|idx| self.graph[idx].name.clone())
            .collect()
    }

    /// Compute the build order.
    ///
    /// Every registered target appears exactly once, each before the
    /// registered targets it lists. Ties are broken by FIFO arrival in the
    /// ready queue, which is seeded in registration order.
    pub fn resolve_order(&self) -> Result<Vec<Target>, DependencyGraphError> {
        debug!(
            targets = self.registered.len(),
            edges = self.graph.edge_count(),
            "Resolving build order"
        );

        let mut indegree = vec![0usize; self.graph.node_count()];
        for edge in self.graph.edge_references() {
            indegree[edge.target().index()] += 1;
        }

        let mut ready: VecDeque<NodeIndex> = self
            .registered
            .iter()
            .copied()
            .filter(|idx| indegree[idx.index()] == 0)
            .collect();

        let mut order = Vec::with_capacity(self.registered.len());
        while let Some(idx) = ready.pop_front() {
            trace!(name = %self.graph[idx].name, "Emitting target");
            order.push(idx);

            for dependency in self.successors(idx) {
                let degree = &mut indegree[dependency.index()];
                *degree -= 1;
                // Phantom targets are tracked but never emitted
                if *degree == 0 && self.graph[dependency].registered {
                    ready.push_back(dependency);
                }
            }
        }

        if order.len() != self.registered.len() {
            let emitted: HashSet<NodeIndex> = order.iter().copied().collect();
            let unresolved = self.names(
                self.registered
                    .iter()
                    .copied()
                    .filter(|idx| !emitted.contains(idx)),
            );
            warn!(
                resolved = order.len(),
                unresolved = ?unresolved,
                "Cyclic dependency detected"
            );
            return Err(DependencyGraphError::CycleDetected {
                resolved: self.names(order),
                unresolved,
            });
        }

        debug!(targets = order.len(), "Build order resolved");
        Ok(self.names(order))
    }

    /// The resolved order reversed, so that listed dependencies come first
    pub fn prerequisite_order(&self) -> Result<Vec<Target>, DependencyGraphError> {
        let mut order = self.resolve_order()?;
        order.reverse();
        Ok(order)
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        toposort(&self.graph, None).is_err()
    }

    /// Find one cycle among the registered targets.
    ///
    /// The returned path is closed: its first and last entries are the same
    /// target, so `X -> [X]` yields `["X", "X"]`. The walk keeps its own
    /// stack, so path length is bounded by memory rather than thread stack.
    pub fn find_cycle(&self) -> Option<Vec<Target>> {
        let mut state = vec![VisitState::Unvisited; self.graph.node_count()];
        let mut path: Vec<DfsFrame> = Vec::new();

        for &root in &self.registered {
            if state[root.index()] != VisitState::Unvisited {
                continue;
            }

            state[root.index()] = VisitState::OnStack;
            path.push(DfsFrame::new(root, self.successors(root)));

            while let Some(frame) = path.last_mut() {
                let Some(&next) = frame.successors.get(frame.cursor) else {
                    state[frame.node.index()] = VisitState::Done;
                    path.pop();
                    continue;
                };
                frame.cursor += 1;

                match state[next.index()] {
                    VisitState::Unvisited => {
                        state[next.index()] = VisitState::OnStack;
                        path.push(DfsFrame::new(next, self.successors(next)));
                    }
                    VisitState::OnStack => {
                        let start = path.iter().position(|f| f.node == next)?;
                        let mut cycle = self.names(path[start..].iter().map(|f| f.node));
                        cycle.push(self.graph[next].name.clone());
                        debug!(length = cycle.len() - 1, "Found dependency cycle");
                        return Some(cycle);
                    }
                    VisitState::Done => {}
                }
            }
        }

        None
    }

    /// Get the declared dependency list of a registered target
    pub fn dependencies(&self, target: &str) -> Option<Vec<Target>> {
        let idx = self.registered_index(target)?;
        Some(self.names(self.successors(idx)))
    }

    /// Get the registered targets that list `target` as a dependency, in
    /// registration order
    pub fn dependents(&self, target: &str) -> Vec<Target> {
        let Some(&idx) = self.node_map.get(target) else {
            return Vec::new();
        };

        self.names(
            self.registered
                .iter()
                .copied()
                .filter(|&key| self.graph.edges_connecting(key, idx).next().is_some()),
        )
    }

    fn registered_index(&self, target: &str) -> Option<NodeIndex> {
        self.node_map
            .get(target)
            .copied()
            .filter(|&idx| self.graph[idx].registered)
    }

    /// Check if a target has been registered
    pub fn contains(&self, target: &str) -> bool {
        self.registered_index(target).is_some()
    }

    /// Registered targets in registration order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.registered
            .iter()
            .map(|&idx| self.graph[idx].name.as_str())
    }

    /// Get the number of registered targets
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Get the number of dependency edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("dependency_graph.test.rs");
}

#[cfg(test)]
mod cycle_tests {
    include!("cycle_detection.test.rs");
}
