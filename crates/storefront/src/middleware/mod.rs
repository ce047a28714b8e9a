//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request spans, with a `request_id` field)
//! 3. Request ID (record/propagate `x-request-id`)
//! 4. Security headers (CSP, frame options, no-store)
//! 5. Visitor lock (one request at a time per session cookie)
//! 6. Session layer (tower-sessions with in-memory store)
//!
//! The [`Visitor`] extractor then loads per-visitor state from the session.

pub mod request_id;
pub mod security_headers;
pub mod session;
pub mod visitor;
pub mod visitor_lock;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
pub use visitor::Visitor;
pub use visitor_lock::{VisitorLocks, visitor_lock_middleware};
