use std::collections::{HashMap, HashSet};

use crate::graph::{Graph, Node, Weight};
use crate::{Error, Result};

/// Best-known distance from the source per node; `None` means unreachable
pub type DistanceMap<N, W> = HashMap<N, Option<W>>;

/// Node preceding each node on its shortest path; `None` for the source and unreached nodes
pub type PredecessorMap<N> = HashMap<N, Option<N>>;

/// Result of a shortest path algorithm execution
///
/// Both maps hold an entry for every node of the graph the run was made on.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<N, W>
where
    N: Node,
    W: Weight,
{
    /// Distances from source to each node
    pub distances: DistanceMap<N, W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: PredecessorMap<N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Node,
    W: Weight,
{
    /// Distance from the source to `target`, `None` if unreachable or unknown
    pub fn distance(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Path and cost from the source to `target`
    pub fn path_to(&self, target: &N) -> Result<(Vec<N>, W)> {
        reconstruct_path(&self.predecessors, &self.distances, &self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Node,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Rebuilds the path from `source` to `destination` by walking predecessor links backwards.
///
/// Fails with [`Error::UnknownNode`] when `destination` was not part of the run, and
/// with [`Error::NoPath`] when it is unreachable: either its distance is unset or the
/// predecessor chain ends somewhere other than `source`.
pub fn reconstruct_path<N, W>(
    predecessors: &PredecessorMap<N>,
    distances: &DistanceMap<N, W>,
    source: &N,
    destination: &N,
) -> Result<(Vec<N>, W)>
where
    N: Node,
    W: Weight,
{
    let cost = match distances.get(destination) {
        None => return Err(Error::unknown_node(destination)),
        Some(None) => return Err(Error::no_path(source, destination)),
        Some(Some(cost)) => *cost,
    };

    if destination == source {
        return Ok((vec![source.clone()], W::zero()));
    }

    let mut path = vec![destination.clone()];
    let mut visited = HashSet::new();
    visited.insert(destination);
    let mut current = destination;

    while let Some(Some(pred)) = predecessors.get(current) {
        // A revisit means the maps did not come from one run
        if !visited.insert(pred) {
            return Err(Error::no_path(source, destination));
        }
        path.push(pred.clone());
        current = pred;
    }

    if current != source {
        return Err(Error::no_path(source, destination));
    }

    path.reverse();
    Ok((path, cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps(
        entries: &[(&'static str, Option<u32>, Option<&'static str>)],
    ) -> (PredecessorMap<&'static str>, DistanceMap<&'static str, u32>) {
        let predecessors = entries.iter().map(|(n, _, p)| (*n, *p)).collect();
        let distances = entries.iter().map(|(n, d, _)| (*n, *d)).collect();
        (predecessors, distances)
    }

    #[test]
    fn test_walks_back_to_source() {
        let (preds, dists) = maps(&[
            ("s", Some(0), None),
            ("a", Some(2), Some("s")),
            ("b", Some(5), Some("a")),
        ]);
        let (path, cost) = reconstruct_path(&preds, &dists, &"s", &"b").unwrap();
        assert_eq!(path, vec!["s", "a", "b"]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn test_self_path() {
        let (preds, dists) = maps(&[("s", Some(0), None), ("a", Some(1), Some("s"))]);
        let (path, cost) = reconstruct_path(&preds, &dists, &"s", &"s").unwrap();
        assert_eq!(path, vec!["s"]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn test_unreached_destination() {
        let (preds, dists) = maps(&[("s", Some(0), None), ("x", None, None)]);
        let err = reconstruct_path(&preds, &dists, &"s", &"x").unwrap_err();
        assert!(matches!(err, Error::NoPath { .. }));
    }

    #[test]
    fn test_chain_ending_elsewhere_is_rejected() {
        // "b" claims a distance but its chain stops at "a", not the source
        let (preds, dists) = maps(&[
            ("s", Some(0), None),
            ("a", Some(1), None),
            ("b", Some(3), Some("a")),
        ]);
        let err = reconstruct_path(&preds, &dists, &"s", &"b").unwrap_err();
        assert_eq!(
            err,
            Error::NoPath {
                start: "s".to_string(),
                goal: "b".to_string()
            }
        );
    }

    #[test]
    fn test_predecessor_cycle_is_rejected() {
        let (preds, dists) = maps(&[
            ("s", Some(0), None),
            ("a", Some(1), Some("b")),
            ("b", Some(2), Some("a")),
        ]);
        let err = reconstruct_path(&preds, &dists, &"s", &"b").unwrap_err();
        assert!(matches!(err, Error::NoPath { .. }));
    }

    #[test]
    fn test_unknown_destination() {
        let (preds, dists) = maps(&[("s", Some(0), None)]);
        let err = reconstruct_path(&preds, &dists, &"s", &"zz").unwrap_err();
        assert_eq!(err, Error::UnknownNode("zz".to_string()));
    }
}
