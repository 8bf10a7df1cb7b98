use crate::graph::DirectedGraph;
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with nodes `0..n`
///
/// Each ordered pair of distinct nodes gets an edge with probability
/// `edge_probability` and an integer weight in `0..=max_weight`.
/// Zero weights are allowed on purpose, they are valid for Dijkstra.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_probability: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<DirectedGraph<usize, u32>> {
    let mut graph = DirectedGraph::new();

    for v in 0..n {
        graph.add_node(v);
    }

    for from in 0..n {
        for to in 0..n {
            if from != to && rng.gen_bool(edge_probability) {
                graph.add_edge(from, to, rng.gen_range(0..=max_weight))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid where each cell links to its 8 neighbors
/// Cardinal moves cost 1.0 and diagonal moves cost 1.4
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::new();

    for v in 0..(width * height) {
        graph.add_node(v);
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
