//! Open Classrooms HTTP Server Binary
//!
//! This is the main entry point for the availability REST API server.
//! It initializes the feed client, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin classrooms-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FEED_URL`: Upstream schedule feed endpoint
//! - `FEED_TIMEOUT_SECS`: Upstream request timeout (default: 15)
//! - `CAMPUS_UTC_OFFSET`: Fixed campus UTC offset (default: -04:00)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use open_classrooms::config::Config;
use open_classrooms::feed::HttpFeed;
use open_classrooms::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Open Classrooms HTTP Server");

    let config = Arc::new(Config::from_env()?);
    let feed = Arc::new(HttpFeed::new(config.feed_url.clone(), config.feed_timeout)?);
    info!(feed_url = %config.feed_url, "Feed client initialized");

    let state = AppState::new(feed, config);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
