use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
        }
    }
}

/// Build the application: API routes, the static frontend, and CORS if enabled
pub fn build_app(config: &ServerConfig, state: AppState) -> Router {
    let mut app = Router::new()
        .merge(create_router())
        // Static file serving for the web frontend
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(cors);
    }

    app
}

/// Start the web server on the given port with the reference network
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config, AppState::default());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Serving static files from {}", config.static_dir);
    println!("🚀 Flight Route Planner starting on http://{}", addr);
    println!("🛫 Route API available at http://{}/api/route", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
