//! Shared utilities for integration tests.

use std::sync::Arc;

use greeting_service::context::{init_cache, init_storage, AppContext};
use greeting_service::http::HttpServer;

/// Start the service on an ephemeral port and return its base URL.
///
/// The listener is bound before the server task is spawned, so callers
/// can connect immediately without waiting for startup.
pub async fn start_service() -> String {
    let context = Arc::new(AppContext::new(init_storage(), init_cache()));
    let server = HttpServer::new(context);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
