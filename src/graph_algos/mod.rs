pub mod connectivity;
pub mod dijkstra;
mod shortest_path;

pub use shortest_path::reconstruct_path;

use crate::collections::FxIndexMap;
use crate::digraph::VertexId;

/// Per-vertex predecessor on the discovered shortest path from a fixed start
/// The start vertex, and any vertex unreachable from it, maps to itself
pub type PredecessorMap = FxIndexMap<VertexId, VertexId>;
