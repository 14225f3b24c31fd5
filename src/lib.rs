//! Minimal HTTP service scaffold: shared context, middleware, routing.

pub mod config;
pub mod context;
pub mod http;

pub use config::ServiceConfig;
pub use context::AppContext;
pub use http::HttpServer;
