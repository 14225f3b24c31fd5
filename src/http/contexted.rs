//! Context-injecting handler adapter.
//!
//! Endpoints are plain functions over `(&AppContext, &Request)`. The
//! adapter binds one of them to the shared context so the pair can be
//! mounted on the router as an ordinary request handler, and owns the
//! one cross-cutting behavior of the handler layer: logging the
//! status/error pair an endpoint reports.

use std::sync::Arc;

use axum::extract::Request;
use axum::response::Response;

use crate::context::AppContext;

/// Error surfaced by an endpoint alongside the response it built.
pub type EndpointError = Box<dyn std::error::Error + Send + Sync>;

/// What one endpoint invocation produces: the response to send, plus
/// an error for the adapter to log when something went wrong while
/// producing it.
pub type EndpointOutcome = (Response, Option<EndpointError>);

/// Endpoint function: runs with the shared context and the live
/// request, and writes its own response.
pub type EndpointFn = fn(&AppContext, &Request) -> EndpointOutcome;

/// Binds an [`AppContext`] to an [`EndpointFn`].
#[derive(Clone)]
pub struct ContextedHandler {
    context: Arc<AppContext>,
    endpoint: EndpointFn,
}

impl ContextedHandler {
    pub fn new(context: Arc<AppContext>, endpoint: EndpointFn) -> Self {
        Self { context, endpoint }
    }

    /// Invoke the endpoint and log any error it reported.
    ///
    /// The endpoint owns its response: on error nothing is rewritten,
    /// the client receives exactly what the endpoint built.
    pub fn handle(&self, request: &Request) -> Response {
        let (response, error) = (self.endpoint)(&self.context, request);

        if let Some(error) = error {
            tracing::error!(
                status = %response.status(),
                error = %error,
                "endpoint reported an error"
            );
            // Status-specific follow-up (alerting, error page remapping)
            // hooks in here.
        }

        response
    }
}
