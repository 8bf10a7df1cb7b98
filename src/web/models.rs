use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a city in the network for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: String,
    pub label: String,
    /// Cost from the departure city, when a route was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    #[serde(default)]
    pub is_path: bool,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_end: bool,
}

/// Represents a direct flight for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete network for web visualization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Response containing a computed route
#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub route_id: Uuid,
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
    pub cost: u32,
    /// Two-line text summary, e.g. "Shortest path: Delhi → Chennai\nTotal cost: 3"
    pub summary: String,
    /// Diagram title
    pub title: String,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
    pub graph: WebGraph,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
