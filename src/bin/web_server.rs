use flight_routes::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = match args.get(1) {
        Some(arg) => arg.parse()?,
        None => 3005,
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("🔧 Starting Flight Route Planner Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   📁 Static files: {}", config.static_dir);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
