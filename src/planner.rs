//! Route planning on top of the shortest path engine
//!
//! A [`RouteRequest`] carries the user's selections. Either selection may be
//! missing; that is rejected here, before the engine runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::{compute_distances, reconstruct_path};
use crate::graph::{DirectedGraph, Graph, Node, Weight};
use crate::{Error, Result};

/// A departure/arrival selection as made in a UI or CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Returns `(start, end)` or the first missing selection
    pub fn resolve(&self) -> Result<(&str, &str)> {
        let start = self.start.as_deref().ok_or(Error::MissingSelection("departure"))?;
        let end = self.end.as_deref().ok_or(Error::MissingSelection("arrival"))?;
        Ok((start, end))
    }
}

/// A cheapest route between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<N, W> {
    pub path: Vec<N>,
    pub cost: W,
}

impl<N: Clone, W> Route<N, W> {
    /// Consecutive `(from, to)` pairs along the path
    pub fn edges(&self) -> Vec<(N, N)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

impl<N: fmt::Display, W> Route<N, W> {
    /// Path rendered as `A → B → C`
    pub fn joined_path(&self) -> String {
        self.path
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// Cheapest route from `start` to `end`
pub fn shortest_path<N, W, G>(graph: &G, start: &N, end: &N) -> Result<Route<N, W>>
where
    N: Node,
    W: Weight,
    G: Graph<N, W>,
{
    let (distances, predecessors) = compute_distances(graph, start)?;
    let (path, cost) = reconstruct_path(&predecessors, &distances, start, end)?;
    Ok(Route { path, cost })
}

/// Validates a request against a city network and plans its route
pub fn plan_route(
    graph: &DirectedGraph<String, u32>,
    request: &RouteRequest,
) -> Result<Route<String, u32>> {
    let (start, end) = request.resolve()?;
    shortest_path(graph, &start.to_string(), &end.to_string())
}

/// Sum of edge weights along `path`, `None` if some hop has no edge
/// or the sum overflows `W`
pub fn path_edge_cost<N, W, G>(graph: &G, path: &[N]) -> Option<W>
where
    N: Node,
    W: Weight,
    G: Graph<N, W>,
{
    path.windows(2)
        .try_fold(W::zero(), |total, pair| {
            graph
                .edge_weight(&pair[0], &pair[1])
                .and_then(|w| total.checked_sum(w))
        })
}

/// Formats an integer with `,` thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two-line summary shown to users
pub fn format_summary<N: fmt::Display>(route: &Route<N, u32>) -> String {
    format!(
        "Shortest path: {}\nTotal cost: {}",
        route.joined_path(),
        format_thousands(u64::from(route.cost))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::networks::flight_network;

    #[test]
    fn test_resolve_reports_missing_selection() {
        let request = RouteRequest {
            start: Some("Delhi".to_string()),
            end: None,
        };
        assert_eq!(request.resolve(), Err(Error::MissingSelection("arrival")));
        assert_eq!(
            RouteRequest::default().resolve(),
            Err(Error::MissingSelection("departure"))
        );
    }

    #[test]
    fn test_plan_route_direct_flight() {
        let graph = flight_network();
        let route = plan_route(&graph, &RouteRequest::new("Delhi", "Chennai")).unwrap();
        assert_eq!(route.path, vec!["Delhi", "Chennai"]);
        assert_eq!(route.cost, 3);
        assert_eq!(route.edges(), vec![("Delhi".to_string(), "Chennai".to_string())]);
    }

    #[test]
    fn test_plan_route_unknown_cities() {
        let graph = flight_network();
        let err = plan_route(&graph, &RouteRequest::new("Atlantis", "Delhi")).unwrap_err();
        assert_eq!(err, Error::UnknownNode("Atlantis".to_string()));
        let err = plan_route(&graph, &RouteRequest::new("Delhi", "Atlantis")).unwrap_err();
        assert_eq!(err, Error::UnknownNode("Atlantis".to_string()));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary() {
        let route = Route {
            path: vec!["Delhi", "Ahmedabad", "Bangalore"],
            cost: 12_500u32,
        };
        assert_eq!(
            format_summary(&route),
            "Shortest path: Delhi → Ahmedabad → Bangalore\nTotal cost: 12,500"
        );
    }

    #[test]
    fn test_path_edge_cost() {
        let graph = flight_network();
        let path: Vec<String> = ["Delhi", "Ahmedabad", "Bangalore"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(path_edge_cost(&graph, &path), Some(10));
        assert_eq!(path_edge_cost(&graph, &path[..1]), Some(0));
    }

    #[test]
    fn test_path_edge_cost_overflow() {
        let graph = DirectedGraph::from_adjacency(vec![
            (0usize, vec![(1usize, u32::MAX)]),
            (1, vec![(2, 1u32)]),
        ])
        .unwrap();
        assert_eq!(path_edge_cost(&graph, &[0, 1]), Some(u32::MAX));
        assert_eq!(path_edge_cost(&graph, &[0, 1, 2]), None);
        assert_eq!(path_edge_cost(&graph, &[0, 2]), None);
    }
}
