use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{compute_distances, reconstruct_path, DistanceMap};
use crate::graph::directed::DirectedGraph;
use crate::graph::networks::flight_network;
use crate::graph::traits::Graph;
use crate::planner::{format_summary, format_thousands, path_edge_cost, Route, RouteRequest};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
///
/// The network is never mutated after startup, so requests share it without
/// locking; every request runs the engine on its own maps.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<DirectedGraph<String, u32>>,
}

impl AppState {
    pub fn new(network: DirectedGraph<String, u32>) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(flight_network())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/cities", get(list_cities))
        .route("/api/network", get(get_network))
        .route("/api/route", post(find_route))
        .route("/api/health", get(health_check))
}

/// List cities in declaration order
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.network.nodes().to_vec())
}

/// Get the whole network without any highlighted route
pub async fn get_network(State(state): State<AppState>) -> Json<WebGraph> {
    Json(convert_graph_to_web(&state.network, None))
}

/// Compute the cheapest route between two cities
pub async fn find_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let (start, end) = request.resolve().map_err(reject)?;
    let (start, end) = (start.to_string(), end.to_string());

    let start_time = Instant::now();
    let (distances, predecessors) = compute_distances(state.network.as_ref(), &start).map_err(reject)?;
    let (path, cost) = reconstruct_path(&predecessors, &distances, &start, &end).map_err(reject)?;
    let execution_time = start_time.elapsed();

    let route = Route { path, cost };
    let summary = format_summary(&route);
    info!("Route {} -> {}: {}", start, end, route.joined_path());

    let title_cost = path_edge_cost(state.network.as_ref(), &route.path).unwrap_or(route.cost);
    let title = format!(
        "Cheapest Flight Route: {} to {}\nTotal Cost: ₹{}",
        start,
        end,
        format_thousands(u64::from(title_cost))
    );

    Ok(Json(RouteResponse {
        route_id: Uuid::new_v4(),
        graph: convert_graph_to_web(&state.network, Some((&route, &distances))),
        start,
        end,
        path: route.path,
        cost: route.cost,
        summary,
        title,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn reject(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::MissingSelection(_) => (StatusCode::BAD_REQUEST, "missing_selection"),
        Error::UnknownNode(_) => (StatusCode::NOT_FOUND, "unknown_city"),
        Error::NoPath { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "no_route"),
        Error::InvalidGraph(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid_network"),
    };
    warn!("Rejected route request: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}

fn convert_graph_to_web(
    graph: &DirectedGraph<String, u32>,
    route: Option<(&Route<String, u32>, &DistanceMap<String, u32>)>,
) -> WebGraph {
    let on_path: HashSet<&String> = route
        .map(|(r, _)| r.path.iter().collect())
        .unwrap_or_default();
    let path_edges: HashSet<(String, String)> = route
        .map(|(r, _)| r.edges().into_iter().collect())
        .unwrap_or_default();
    let endpoints = route.and_then(|(r, _)| Some((r.path.first()?, r.path.last()?)));

    let nodes = graph
        .nodes()
        .iter()
        .map(|city| WebNode {
            id: city.clone(),
            label: city.clone(),
            distance: route.and_then(|(_, distances)| distances.get(city).copied().flatten()),
            is_path: on_path.contains(city),
            is_start: endpoints.map_or(false, |(start, _)| start == city),
            is_end: endpoints.map_or(false, |(_, end)| end == city),
        })
        .collect();

    let links = graph
        .edges()
        .into_iter()
        .map(|(source, target, weight)| WebEdge {
            is_path: path_edges.contains(&(source.clone(), target.clone())),
            source,
            target,
            weight,
        })
        .collect();

    WebGraph { nodes, links }
}
