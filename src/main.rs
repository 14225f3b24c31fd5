//! greeting-service
//!
//! A minimal HTTP service scaffold built with Tokio and Axum: a shared
//! application context, a middleware chain, a declarative route table,
//! and two placeholder endpoints.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → router (method + path match)
//!     → middleware chain (session check, content-type)
//!     → contexted handler (shared context injected)
//!     → endpoint (writes response, reports status/error)
//!     → adapter logs errors
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_service::config::{load_config, ServiceConfig};
use greeting_service::context::{init_cache, init_storage, AppContext};
use greeting_service::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file path as the only argument; defaults cover
    // everything when none is given.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    // Initialize tracing subscriber; RUST_LOG wins over the configured
    // level.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.observability.log_level)
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("greeting-service v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    // Build the shared context once, before the listener accepts
    // anything. It is read concurrently by every request from here on.
    let context = Arc::new(AppContext::new(init_storage(), init_cache()));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(context);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
