pub mod traits;
pub mod dijkstra;

pub use traits::{
    reconstruct_path, DistanceMap, PredecessorMap, ShortestPathAlgorithm, ShortestPathResult,
};

use crate::graph::{Graph, Node, Weight};
use crate::Result;

/// Runs Dijkstra from `source` and returns its distance and predecessor maps
pub fn compute_distances<N, W, G>(
    graph: &G,
    source: &N,
) -> Result<(DistanceMap<N, W>, PredecessorMap<N>)>
where
    N: Node,
    W: Weight,
    G: Graph<N, W>,
{
    let result = dijkstra::Dijkstra::new().compute_shortest_paths(graph, source)?;
    Ok((result.distances, result.predecessors))
}
