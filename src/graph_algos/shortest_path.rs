use crate::digraph::VertexId;
use super::PredecessorMap;


/// Construct the shortest path from `start` to `goal` out of a predecessor map
/// Returns the ordered path as a vector of vertex ids from start to goal
/// Returns None when `goal` is unreachable from `start` or either vertex is
/// absent from the map
pub fn reconstruct_path(preds: &PredecessorMap, start: VertexId, goal: VertexId) -> Option<Vec<VertexId>> {

    if !preds.contains_key(&start) || !preds.contains_key(&goal) {
        return None;
    }

    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        let prev = *preds.get(&current)?;
        // A vertex that is its own predecessor was never reached
        if prev == current {
            return None;
        }
        path.push(prev);
        current = prev;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Some(path)
}
