//! Shared application context.
//!
//! One [`AppContext`] is built in the startup routine, before the
//! listener accepts its first connection, and handed to every handler
//! behind an `Arc`. It must never be mutated afterwards: all in-flight
//! requests read it concurrently without synchronization. Anything
//! request-scoped (session IDs and the like) does not belong here.

use redis::aio::ConnectionManager;
use sqlx::PgPool;

/// Resource handles shared across all requests.
pub struct AppContext {
    /// Database pool. `None` until storage initialization is wired up.
    pub db: Option<PgPool>,

    /// Cache connection manager. `None` until cache initialization is
    /// wired up.
    pub cache: Option<ConnectionManager>,
}

impl AppContext {
    /// Create the context from the startup factories' output.
    pub fn new(db: Option<PgPool>, cache: Option<ConnectionManager>) -> Self {
        Self { db, cache }
    }
}

/// Storage pool factory.
///
/// TODO: connect a `PgPool` here once the service has a database to
/// talk to.
pub fn init_storage() -> Option<PgPool> {
    None
}

/// Cache pool factory.
///
/// TODO: build a `ConnectionManager` here once a Redis endpoint is
/// configured.
pub fn init_cache() -> Option<ConnectionManager> {
    None
}
