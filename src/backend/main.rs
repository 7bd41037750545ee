/**
 * RelaySim Server Entry Point
 *
 * This is the main entry point for the RelaySim backend server.
 * It initializes the Axum HTTP server with the WebSocket relay, the
 * simulation ticker, and the diagram store.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    eprintln!("[STARTUP] Setting RUST_LOG={}", env_filter);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    // Create the Axum app (this also spawns the simulation ticker)
    let config = relaysim::backend::server::config::ServerConfig::from_env();
    let port = config.port;
    let app = relaysim::backend::server::init::create_app_with_config(config).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    eprintln!("[STARTUP] Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("[STARTUP] Listening on {}", addr);
    eprintln!(
        "[STARTUP] Frontend available at http://127.0.0.1:{}/static/index.html",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
