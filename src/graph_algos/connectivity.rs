use crate::digraph::{Digraph, VertexId};

use rustc_hash::FxHashSet;


impl<V, E> Digraph<V, E> {

    /// Whether every vertex can reach every other vertex via directed paths
    /// https://en.wikipedia.org/wiki/Strongly_connected_component
    ///
    /// Runs a depth-first traversal from each vertex and checks that it
    /// reaches the whole graph. O(V * (V + E)) - fine for road-network
    /// sized graphs. An empty graph is vacuously strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        let vertices = self.vertices();

        for &start in &vertices {
            if self.reachable_from(start).len() != vertices.len() {
                return false;
            }
        }

        true
    }

    /// The set of vertices reachable from `start`, including `start` itself
    /// Iterative depth-first traversal - an explicit stack avoids blowing
    /// the call stack on long path graphs
    fn reachable_from(&self, start: VertexId) -> FxHashSet<VertexId> {
        let mut visited: FxHashSet<VertexId> = FxHashSet::default();
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            for (to, _) in self.outgoing(vertex) {
                if !visited.contains(&to) {
                    stack.push(to);
                }
            }
        }

        visited
    }
}
