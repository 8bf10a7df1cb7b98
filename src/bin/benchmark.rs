use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use flight_routes::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use flight_routes::graph::generators::generate_random;
use flight_routes::graph::{DirectedGraph, Graph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &DirectedGraph<usize, u32>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<usize, u32, DirectedGraph<usize, u32>>,
{
    println!(
        "Running {} on graph with {} nodes and {} edges...",
        algorithm.name(),
        graph.node_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - Failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    // Count reachable nodes
    let reachable = result.distances.values().filter(|d| d.is_some()).count();
    println!("  - Found {} reachable nodes in {:?}", reachable, duration);

    duration
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes to test; edges are dense, so keep these modest
    let graph_sizes = vec![10, 100, 500, 1_000, 2_000];

    // Average out-degree per node
    let out_degree = 8.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random directed graphs");
    println!("Average out-degree: {}", out_degree);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let probability = (out_degree / size as f64).min(1.0);
        let graph = generate_random(size, probability, 100, &mut rng)?;
        let time = benchmark_algorithm(&dijkstra, &graph, 0);
        results.push((size, graph.edge_count(), time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Nodes", "Edges", "Dijkstra (µs)");
    println!("-----------------------------------------------------");

    for (size, edges, time) in &results {
        println!("{:<10} | {:<10} | {:<15}", size, edges, time.as_micros());
    }

    Ok(())
}
