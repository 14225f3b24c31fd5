//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware stack)
//!     → middleware/ (session check, content-type)
//!     → routes.rs (declarative route table)
//!     → contexted.rs (bind shared context, invoke endpoint, log errors)
//!     → handlers.rs (endpoint business logic)
//!     → Send to client
//! ```

pub mod contexted;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use contexted::{ContextedHandler, EndpointError, EndpointFn, EndpointOutcome};
pub use routes::{RouteDef, ROUTES};
pub use server::{build_router, HttpServer};
