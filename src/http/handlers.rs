//! Endpoint handlers.
//!
//! Each endpoint receives the shared context and the live request.
//! Neither of the current endpoints touches the context yet; they
//! exist to exercise the routing and adapter plumbing end to end.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::context::AppContext;
use crate::http::contexted::EndpointOutcome;

/// GET /hello
pub fn hello(_context: &AppContext, _request: &Request) -> EndpointOutcome {
    ((StatusCode::OK, "Hello World").into_response(), None)
}

/// GET /goodbye
pub fn goodbye(_context: &AppContext, _request: &Request) -> EndpointOutcome {
    ((StatusCode::OK, "Goodbye World").into_response(), None)
}
