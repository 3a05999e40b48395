//! routegraph
//!
//! A generic, mutable, in-memory directed graph stored as adjacency lists.
//! Vertices and edges each carry a caller-defined payload type, and vertices
//! are keyed by caller-chosen integer ids.
//!
//! On top of the store sit two graph algorithms used for route planning:
//! - a strong-connectivity test (every vertex reaches every other vertex)
//! - single-source shortest paths (Dijkstra) driven by a caller-supplied
//!   edge weight function

mod collections;

pub mod digraph;
pub mod errors;
pub mod graph_algos;

pub use digraph::{Digraph, VertexId};
pub use errors::GraphError;
pub use graph_algos::{PredecessorMap, reconstruct_path};
