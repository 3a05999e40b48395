use crate::collections::FxIndexMap;
use crate::digraph::{Digraph, VertexId};
use crate::errors::GraphError;
use super::PredecessorMap;

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use num_traits::Zero;


impl<V, E> Digraph<V, E> {

    /// Single-source shortest paths using Dijkstra's Algorithm
    /// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
    ///
    /// `weight` maps an edge payload to a non-negative cost. Negative
    /// weights break the algorithm's settling assumption and are out of
    /// contract.
    ///
    /// Returns the predecessor of every vertex on its shortest path from
    /// `start`. The start vertex and any vertex unreachable from it map to
    /// themselves. Ties between equal-cost paths are broken by queue order
    /// and must not be assumed deterministic.
    pub fn find_shortest_paths<C, W>(&self, start: VertexId, weight: W) -> Result<PredecessorMap, GraphError>
    where
        C: Zero + Ord + Copy + Debug,
        W: Fn(&E) -> C,
    {

        if !self.contains_vertex(start) {
            return Err(GraphError::MissingVertex(start));
        }

        // Every vertex starts out as its own predecessor with no known
        // distance - None is the "infinite" sentinel
        let mut preds: PredecessorMap = PredecessorMap::default();
        let mut dist: FxIndexMap<VertexId, Option<C>> = FxIndexMap::default();
        for v in self.vertices() {
            preds.insert(v, v);
            dist.insert(v, None);
        }
        dist.insert(start, Some(Zero::zero()));

        // Nodes to visit - binary heap sorts biggest to smallest, so the
        // entry ordering is reversed to always expand the cheapest node first
        let mut nodes_to_visit: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();
        nodes_to_visit.push(QueueEntry {
            vertex: start,
            cost: Zero::zero(), // This is the cost from the start vertex
        });

        while let Some(QueueEntry { cost, vertex }) = nodes_to_visit.pop() {

            // fetch current best cost for the vertex
            // every queued vertex has a known distance, so the unwraps hold
            let best = dist[&vertex].unwrap();

            // If the cost from the BinaryHeap is higher than the best cost,
            // skip it - we've already found a better path to this vertex
            if cost > best {
                continue;
            }

            // relax all outgoing edges
            for (to, payload) in self.outgoing(vertex) {

                // new cost to reach the neighbor = vertex cost + edge weight
                let new_cost = cost + weight(payload);

                let improved = match dist[&to] {
                    None => true, // first path found to this neighbor
                    Some(c) => new_cost < c,
                };

                // Only re-queue when we've found a better path
                if improved {
                    dist.insert(to, Some(new_cost));
                    preds.insert(to, vertex);
                    nodes_to_visit.push(QueueEntry {
                        vertex: to,
                        cost: new_cost,
                    });
                }
            }
        }

        Ok(preds)
    }
}


/// Priority queue entry
/// - for ordering we only need the cost and a way to identify the vertex
#[derive(Debug)]
struct QueueEntry<C> {
    vertex: VertexId,
    cost: C,
}

impl<C: Ord> Ord for QueueEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<C: Ord> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<C: PartialEq> Eq for QueueEntry<C> {}
