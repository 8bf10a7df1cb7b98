//! Flight Routes - cheapest routes over a weighted city network
//!
//! This library finds least-cost paths over small directed weighted graphs, such as a
//! table of cities and flight costs, using Dijkstra's algorithm. The engine computes
//! distances and predecessors from one source; the path to any destination is then
//! rebuilt from the predecessor map.
//!
//! Edge weights must be non-negative. [`DirectedGraph`] rejects negative weights when
//! the graph is built, so the engine itself never checks them.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod planner;
pub mod web;

pub use algorithm::{
    compute_distances, dijkstra::Dijkstra, reconstruct_path, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::networks::flight_network;
pub use planner::{format_summary, plan_route, shortest_path, Route, RouteRequest};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No route exists from {start} to {goal}")]
    NoPath { start: String, goal: String },

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Missing selection: please select a {0} city")]
    MissingSelection(&'static str),
}

impl Error {
    pub(crate) fn unknown_node<N: std::fmt::Display>(node: &N) -> Self {
        Error::UnknownNode(node.to_string())
    }

    pub(crate) fn no_path<N: std::fmt::Display>(start: &N, goal: &N) -> Self {
        Error::NoPath {
            start: start.to_string(),
            goal: goal.to_string(),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
