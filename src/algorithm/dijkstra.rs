use std::collections::HashMap;

use log::debug;

use crate::algorithm::{DistanceMap, PredecessorMap, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Node, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Node,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::unknown_node(source));
        }

        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances: DistanceMap<N, W> = HashMap::with_capacity(n);
        let mut predecessors: PredecessorMap<N> = HashMap::with_capacity(n);
        for node in graph.nodes() {
            distances.insert(node.clone(), None);
            predecessors.insert(node.clone(), None);
        }

        // Distance to source is 0
        distances.insert(source.clone(), Some(W::zero()));

        let mut queue = Frontier::new();
        queue.push(source.clone(), W::zero());
        let mut settled = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // If we've already found a shorter path to u, this entry is stale
            if let Some(Some(current_dist)) = distances.get(&u) {
                if dist_u > *current_dist {
                    continue;
                }
            }
            settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(&u)? {
                // A cost that does not fit W is never an improvement
                let new_dist = match dist_u.checked_sum(*weight) {
                    Some(new_dist) => new_dist,
                    None => {
                        debug!("Skipping {} -> {}: cost overflows {:?}", u, v, dist_u);
                        continue;
                    }
                };

                let should_update = match distances.get(v) {
                    Some(Some(current_dist)) => new_dist < *current_dist,
                    _ => true,
                };

                if should_update {
                    distances.insert(v.clone(), Some(new_dist));
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), new_dist);
                }
            }
        }

        debug!(
            "Dijkstra from {} settled {} of {} nodes",
            source, settled, n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}
