use std::error::Error;
use std::fmt;

use crate::digraph::VertexId;


/// Errors reported by the graph store and its algorithms
/// Every failure is surfaced at the offending call and leaves the graph unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    DuplicateVertex(VertexId), // vertex id is already present
    DuplicateEdge(VertexId, VertexId), // (from, to) pair already has an edge
    MissingVertex(VertexId), // referenced vertex id is not in the graph
    MissingEdge(VertexId, VertexId), // no edge exists for the (from, to) pair
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateVertex(v) => write!(f, "vertex {v} already exists"),
            GraphError::DuplicateEdge(from, to) => write!(f, "edge {from} -> {to} already exists"),
            GraphError::MissingVertex(v) => write!(f, "vertex {v} does not exist"),
            GraphError::MissingEdge(from, to) => write!(f, "edge {from} -> {to} does not exist"),
        }
    }
}

impl Error for GraphError {}
