//! Single-pair shortest paths on weighted undirected graphs using
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! over an array-backed binary min-heap.
//!
//! Build a graph on a [DijkstraCalculator] by registering vertices and then
//! connecting them with weighted edges, then query it for paths. The graph
//! persists across queries; each query allocates its own search state, so
//! shared read-only queries are safe to run from multiple threads.
//!
//! # Example
//!
//! ```rust
//! use dijkstra_calculator::DijkstraCalculator;
//!
//! let mut graph = DijkstraCalculator::new();
//! for id in ["A", "B", "C", "D"] {
//!     graph.add_vertex(id);
//! }
//! graph.add_edge_weighted("A", "B", 4.0)?;
//! graph.add_edge_weighted("A", "C", 1.0)?;
//! graph.add_edge_weighted("C", "D", 1.0)?;
//! graph.add_edge_weighted("D", "B", 1.0)?;
//!
//! assert_eq!(graph.calculate_shortest_path("A", "B"), ["A", "C", "D", "B"]);
//! # Ok::<(), dijkstra_calculator::GraphError>(())
//! ```
pub mod calculator;
pub mod min_heap;

pub use calculator::{DijkstraCalculator, GraphError, NodeId, PathSegment};
pub use min_heap::MinHeap;
