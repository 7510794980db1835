use ahash::RandomState;
use std::collections::{hash_map::Entry, HashMap};
use thiserror::Error;

use crate::min_heap::MinHeap;

/// A unique identifier for a vertex. Uniqueness is the caller's
/// responsibility.
pub type NodeId = String;

/// Error raised when an operation references a vertex that was never
/// registered with [DijkstraCalculator::add_vertex].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("unknown vertex `{0}`")]
    InvalidVertex(NodeId),
}

/// A single hop of a path, as returned by
/// [DijkstraCalculator::calculate_shortest_path_segments].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeTo {
    to: usize,
    weight: f64,
}

/// Struct for building a weighted undirected graph and running shortest-path
/// queries against it.
///
/// Vertices are registered up front with [add_vertex](Self::add_vertex) and
/// connected with [add_edge](Self::add_edge) or
/// [add_edge_weighted](Self::add_edge_weighted). Queries never mutate the
/// graph, so a `&self` query can run while the caller shares the calculator
/// freely.
///
/// # Example
/// ```rust
/// use dijkstra_calculator::DijkstraCalculator;
///
/// let mut graph = DijkstraCalculator::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_vertex("C");
/// graph.add_edge_weighted("A", "B", 4.0)?;
/// graph.add_edge_weighted("B", "C", 1.0)?;
///
/// assert_eq!(graph.calculate_shortest_path("A", "C"), ["A", "B", "C"]);
/// # Ok::<(), dijkstra_calculator::GraphError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct DijkstraCalculator {
    indices: HashMap<NodeId, usize, RandomState>,
    nodes: Vec<NodeId>,
    adjacency: Vec<Vec<EdgeTo>>,
}

impl DijkstraCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex. Registering an id that already exists is a no-op
    /// and leaves its edges untouched.
    pub fn add_vertex(&mut self, id: impl Into<NodeId>) {
        match self.indices.entry(id.into()) {
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                self.nodes.push(slot.key().clone());
                self.adjacency.push(Vec::new());
                slot.insert(self.nodes.len() - 1);
            }
        }
    }

    /// Connect two registered vertices with an edge of weight 1.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<(), GraphError> {
        self.add_edge_weighted(u, v, 1.0)
    }

    /// Connect two registered vertices with a weighted undirected edge,
    /// stored as a directed record in both adjacency lists. Parallel edges
    /// between the same pair accumulate; relaxation simply prefers whichever
    /// is cheaper. Weights are assumed non-negative.
    ///
    /// Both endpoints are resolved before anything is inserted, so a failed
    /// call leaves the graph unchanged.
    pub fn add_edge_weighted(&mut self, u: &str, v: &str, weight: f64) -> Result<(), GraphError> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        self.adjacency[a].push(EdgeTo { to: b, weight });
        self.adjacency[b].push(EdgeTo { to: a, weight });
        Ok(())
    }

    /// The number of registered vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.indices.contains_key(id)
    }

    /// Find the cheapest path from `start` to `finish`, inclusive of both
    /// endpoints.
    ///
    /// Returns an empty `Vec` when the target is unreachable, when either
    /// endpoint is unknown, or when `start == finish` (a path to oneself is
    /// not reported as a single-node path). Queries never fail or panic, even
    /// on an empty graph.
    ///
    /// Equal-cost routes are broken deterministically: the first route to
    /// establish a distance keeps the predecessor, under the heap's
    /// insertion-order tie rules and vertex registration order.
    #[tracing::instrument(skip(self))]
    pub fn calculate_shortest_path(&self, start: &str, finish: &str) -> Vec<NodeId> {
        let (Some(&start), Some(&finish)) = (self.indices.get(start), self.indices.get(finish))
        else {
            return Vec::new();
        };

        let mut distances = vec![f64::INFINITY; self.nodes.len()];
        let mut previous: Vec<Option<usize>> = vec![None; self.nodes.len()];
        let mut frontier = MinHeap::with_capacity(self.nodes.len());

        distances[start] = 0.0;
        for node in 0..self.nodes.len() {
            frontier.push(node, distances[node]);
        }

        let mut path = Vec::new();
        while let Some((node, cost)) = frontier.pop() {
            if node == finish {
                tracing::trace!(cost, "target settled");
                let mut current = Some(node);
                while let Some(idx) = current {
                    path.push(idx);
                    current = previous[idx];
                }
                break;
            }

            // A shorter route to this node was settled after this entry was
            // queued.
            if cost > distances[node] {
                continue;
            }

            for edge in &self.adjacency[node] {
                let candidate = distances[node] + edge.weight;
                if candidate < distances[edge.to] {
                    distances[edge.to] = candidate;
                    previous[edge.to] = Some(node);
                    frontier.push(edge.to, candidate);
                }
            }
        }

        // A lone endpoint means no meaningful path: the target was reached
        // with no predecessor (unreachable, or start == finish).
        if path.len() <= 1 {
            return Vec::new();
        }
        path.reverse();
        path.into_iter().map(|idx| self.nodes[idx].clone()).collect()
    }

    /// Like [calculate_shortest_path](Self::calculate_shortest_path), but
    /// returned as one `{source, target}` pair per hop. Empty whenever the
    /// underlying path has fewer than two nodes.
    pub fn calculate_shortest_path_segments(&self, start: &str, finish: &str) -> Vec<PathSegment> {
        self.calculate_shortest_path(start, finish)
            .windows(2)
            .map(|hop| PathSegment {
                source: hop[0].clone(),
                target: hop[1].clone(),
            })
            .collect()
    }

    fn index_of(&self, id: &str) -> Result<usize, GraphError> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::InvalidVertex(id.to_owned()))
    }
}
