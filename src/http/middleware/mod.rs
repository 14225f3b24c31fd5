//! Request middleware.
//!
//! Each middleware is an `async fn(Request, Next) -> Response` mounted
//! with `axum::middleware::from_fn`. A middleware may run code before
//! and after delegating; none of the current ones short-circuits.

pub mod content_type;
pub mod session;

pub use content_type::force_plain_text;
pub use session::check_session;
