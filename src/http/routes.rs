//! Declarative route table.
//!
//! Routes are plain data compiled into the axum router at startup.
//! Paths must be unique within the table; axum rejects a duplicate
//! registration when the router is built.

use axum::routing::MethodFilter;

use crate::http::contexted::EndpointFn;
use crate::http::handlers;

/// One routable endpoint.
pub struct RouteDef {
    /// Stable identifier for logs.
    pub name: &'static str,

    /// HTTP methods the route accepts.
    pub methods: MethodFilter,

    /// Path to mount at (exact match).
    pub path: &'static str,

    /// Endpoint function dispatched to.
    pub endpoint: EndpointFn,
}

/// Every route the service exposes.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "hello",
        methods: MethodFilter::GET,
        path: "/hello",
        endpoint: handlers::hello,
    },
    RouteDef {
        name: "goodbye",
        methods: MethodFilter::GET,
        path: "/goodbye",
        endpoint: handlers::goodbye,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_names_and_paths_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate route name {:?}", a.name);
                assert_ne!(a.path, b.path, "duplicate route path {:?}", a.path);
            }
        }
    }
}
