//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compile the route table into an axum Router
//! - Bind each endpoint to the shared context
//! - Wire up middleware (session check, content-type, tracing)
//! - Serve connections until shutdown

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::from_fn;
use axum::routing::on;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::http::contexted::ContextedHandler;
use crate::http::middleware::{check_session, force_plain_text};
use crate::http::routes::ROUTES;

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the shared context.
    pub fn new(context: Arc<AppContext>) -> Self {
        Self {
            router: build_router(context),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the axum router from the route table.
///
/// Every entry is bound to the shared context through a
/// [`ContextedHandler`]. The middleware stack wraps all routes: the
/// trace layer runs outermost, then the session check, then the
/// content-type stamp, then the handler.
pub fn build_router(context: Arc<AppContext>) -> Router {
    let mut router = Router::new();

    for route in ROUTES {
        tracing::debug!(name = route.name, path = route.path, "Mounting route");
        let contexted = ContextedHandler::new(context.clone(), route.endpoint);
        router = router.route(
            route.path,
            on(route.methods, move |request: Request| {
                let contexted = contexted.clone();
                async move { contexted.handle(&request) }
            }),
        );
    }

    router
        .layer(from_fn(force_plain_text))
        .layer(from_fn(check_session))
        .layer(TraceLayer::new_for_http())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
