use crate::collections::FxIndexMap;
use crate::errors::GraphError;


/// Vertex identifier
/// Chosen by the caller at insertion time, unique within a graph
/// Ids are not required to be contiguous or zero-based
pub type VertexId = i64;


/// A directed edge and its payload
/// Only exists while both endpoints are vertices of the graph
#[derive(Clone, Debug)]
struct Edge<E> {
    from: VertexId,
    to: VertexId,
    payload: E,
}

/// A vertex payload plus its outgoing edges in insertion order
#[derive(Clone, Debug)]
struct Vertex<V, E> {
    payload: V,
    edges: Vec<Edge<E>>,
}


/// Mutable in-memory directed graph with adjacency-list storage
/// V is the payload stored per vertex, E the payload stored per edge
///
/// The graph owns every vertex and edge record. Cloning produces a fully
/// independent deep copy. Counts are always derived from the stored
/// collections, so they can never drift.
#[derive(Clone, Debug)]
pub struct Digraph<V, E> {
    verts: FxIndexMap<VertexId, Vertex<V, E>>,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Digraph<V, E> {

    /// Create a new, empty graph
    pub fn new() -> Self {
        Self { verts: FxIndexMap::default() }
    }

    /// Add a vertex with the given id and payload
    /// Fails if the id is already taken
    pub fn add_vertex(&mut self, id: VertexId, payload: V) -> Result<(), GraphError> {
        if self.verts.contains_key(&id) {
            return Err(GraphError::DuplicateVertex(id));
        }
        self.verts.insert(id, Vertex { payload, edges: Vec::new() });
        Ok(())
    }

    /// Add a directed edge from `from` to `to` with the given payload
    /// Fails if either endpoint is missing or the pair already has an edge
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> Result<(), GraphError> {
        if !self.verts.contains_key(&from) {
            return Err(GraphError::MissingVertex(from));
        }
        if !self.verts.contains_key(&to) {
            return Err(GraphError::MissingVertex(to));
        }

        // At most one edge per (from, to) pair
        let vertex = self.verts.get_mut(&from).unwrap();
        if vertex.edges.iter().any(|e| e.to == to) {
            return Err(GraphError::DuplicateEdge(from, to));
        }

        vertex.edges.push(Edge { from, to, payload });
        Ok(())
    }

    /// Remove a vertex along with every incoming and outgoing edge
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<(), GraphError> {
        if self.verts.shift_remove(&id).is_none() {
            return Err(GraphError::MissingVertex(id));
        }

        // Cascade: drop edges pointing at the removed vertex
        for vertex in self.verts.values_mut() {
            vertex.edges.retain(|e| e.to != id);
        }
        Ok(())
    }

    /// Remove the edge with the given (from, to) pair
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        if !self.verts.contains_key(&from) {
            return Err(GraphError::MissingVertex(from));
        }
        if !self.verts.contains_key(&to) {
            return Err(GraphError::MissingVertex(to));
        }

        let vertex = self.verts.get_mut(&from).unwrap();
        match vertex.edges.iter().position(|e| e.to == to) {
            Some(i) => {
                vertex.edges.remove(i);
                Ok(())
            }
            None => Err(GraphError::MissingEdge(from, to)),
        }
    }

    /// All vertex ids, in insertion order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.verts.keys().copied().collect()
    }

    /// All (from, to) pairs in the graph
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.verts
            .values()
            .flat_map(|v| v.edges.iter().map(|e| (e.from, e.to)))
            .collect()
    }

    /// The (from, to) pairs of edges outgoing from one vertex
    pub fn edges_from(&self, vertex: VertexId) -> Result<Vec<(VertexId, VertexId)>, GraphError> {
        let v = self.verts.get(&vertex).ok_or(GraphError::MissingVertex(vertex))?;
        Ok(v.edges.iter().map(|e| (e.from, e.to)).collect())
    }

    /// The payload stored on a vertex
    pub fn vertex_payload(&self, vertex: VertexId) -> Result<&V, GraphError> {
        let v = self.verts.get(&vertex).ok_or(GraphError::MissingVertex(vertex))?;
        Ok(&v.payload)
    }

    /// The payload stored on the edge with the given (from, to) pair
    pub fn edge_payload(&self, from: VertexId, to: VertexId) -> Result<&E, GraphError> {
        let v = self.verts.get(&from).ok_or(GraphError::MissingVertex(from))?;
        if !self.verts.contains_key(&to) {
            return Err(GraphError::MissingVertex(to));
        }
        v.edges
            .iter()
            .find(|e| e.to == to)
            .map(|e| &e.payload)
            .ok_or(GraphError::MissingEdge(from, to))
    }

    /// Number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    /// Total number of edges, summed over every vertex's outgoing list
    pub fn edge_count(&self) -> usize {
        self.verts.values().map(|v| v.edges.len()).sum()
    }

    /// Number of edges outgoing from one vertex
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        let v = self.verts.get(&vertex).ok_or(GraphError::MissingVertex(vertex))?;
        Ok(v.edges.len())
    }

    /// Whether the graph contains a vertex with the given id
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.verts.contains_key(&vertex)
    }

    /// Iterate the outgoing (to, edge payload) pairs of a vertex
    /// Internal seam for the algorithms, which have already checked `vertex`
    pub(crate) fn outgoing(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, &E)> {
        self.verts
            .get(&vertex)
            .into_iter()
            .flat_map(|v| v.edges.iter().map(|e| (e.to, &e.payload)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Helper to build a small graph: 1 -> 2 -> 3 with a shortcut 1 -> 3
    fn create_test_graph() -> Digraph<&'static str, u32> {
        let mut g = Digraph::new();
        g.add_vertex(1, "one").unwrap();
        g.add_vertex(2, "two").unwrap();
        g.add_vertex(3, "three").unwrap();
        g.add_edge(1, 2, 10).unwrap();
        g.add_edge(2, 3, 20).unwrap();
        g.add_edge(1, 3, 50).unwrap();
        g
    }

    #[test]
    fn test_payload_round_trip() {
        let g = create_test_graph();

        assert_eq!(g.vertex_payload(1).unwrap(), &"one");
        assert_eq!(g.vertex_payload(3).unwrap(), &"three");
        assert_eq!(g.edge_payload(1, 2).unwrap(), &10);
        assert_eq!(g.edge_payload(1, 3).unwrap(), &50);
    }

    #[test]
    fn test_counts_match_collections() {
        let mut g = create_test_graph();

        assert_eq!(g.vertex_count(), g.vertices().len());
        assert_eq!(g.edge_count(), g.edges().len());

        g.remove_edge(1, 3).unwrap();
        g.add_vertex(4, "four").unwrap();
        g.add_edge(3, 4, 5).unwrap();

        assert_eq!(g.vertex_count(), g.vertices().len());
        assert_eq!(g.edge_count(), g.edges().len());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut g = create_test_graph();
        let before = g.vertices();

        let result = g.add_vertex(2, "again");

        assert_eq!(result, Err(GraphError::DuplicateVertex(2)));
        assert_eq!(g.vertices(), before);
        assert_eq!(g.vertex_payload(2).unwrap(), &"two");
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut g = create_test_graph();

        let result = g.add_edge(1, 2, 99);

        assert_eq!(result, Err(GraphError::DuplicateEdge(1, 2)));
        assert_eq!(g.edge_count(), 3);
        // The original payload is untouched
        assert_eq!(g.edge_payload(1, 2).unwrap(), &10);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut g = create_test_graph();

        assert_eq!(g.add_edge(1, 9, 1), Err(GraphError::MissingVertex(9)));
        assert_eq!(g.add_edge(9, 1, 1), Err(GraphError::MissingVertex(9)));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut g = create_test_graph();

        g.remove_vertex(3).unwrap();

        // No surviving edge may mention the removed vertex
        for (from, to) in g.edges() {
            assert_ne!(from, 3);
            assert_ne!(to, 3);
        }
        assert_eq!(g.edges(), vec![(1, 2)]);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_remove_missing_vertex() {
        let mut g = create_test_graph();
        assert_eq!(g.remove_vertex(9), Err(GraphError::MissingVertex(9)));
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = create_test_graph();

        g.remove_edge(1, 3).unwrap();

        assert_eq!(g.edge_payload(1, 3), Err(GraphError::MissingEdge(1, 3)));
        assert_eq!(g.edge_count(), 2);
        // Removing again reports the edge as gone, not the vertices
        assert_eq!(g.remove_edge(1, 3), Err(GraphError::MissingEdge(1, 3)));
        assert_eq!(g.remove_edge(1, 9), Err(GraphError::MissingVertex(9)));
    }

    #[test]
    fn test_edges_from() {
        let g = create_test_graph();

        assert_eq!(g.edges_from(1).unwrap(), vec![(1, 2), (1, 3)]);
        assert_eq!(g.edges_from(3).unwrap(), vec![]);
        assert_eq!(g.edges_from(9), Err(GraphError::MissingVertex(9)));

        // Repeated calls without mutation agree
        assert_eq!(g.edges_from(1).unwrap(), g.edges_from(1).unwrap());
    }

    #[test]
    fn test_out_degree() {
        let g = create_test_graph();

        assert_eq!(g.out_degree(1).unwrap(), 2);
        assert_eq!(g.out_degree(3).unwrap(), 0);
        assert_eq!(g.out_degree(9), Err(GraphError::MissingVertex(9)));
    }

    #[test]
    fn test_non_contiguous_ids() {
        let mut g: Digraph<(), u32> = Digraph::new();
        g.add_vertex(-7, ()).unwrap();
        g.add_vertex(1000, ()).unwrap();
        g.add_edge(1000, -7, 3).unwrap();

        assert_eq!(g.vertices(), vec![-7, 1000]);
        assert_eq!(g.edge_payload(1000, -7).unwrap(), &3);
    }

    #[test]
    fn test_clone_is_independent() {
        let g = create_test_graph();
        let mut copy = g.clone();

        copy.remove_vertex(2).unwrap();
        copy.add_vertex(4, "four").unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.edge_count(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let g: Digraph<(), ()> = Digraph::new();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.vertices().is_empty());
        assert!(g.edges().is_empty());
    }
}
