//! HTTP middleware stack for the functions server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, request transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. CORS headers (function routes only)

pub mod cors;

pub use cors::{cors_headers_middleware, method_not_allowed, preflight};
