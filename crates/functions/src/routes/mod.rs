//! HTTP route handlers for the functions server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                    - Liveness check
//! GET  /health/ready                              - Readiness check (database)
//!
//! # Functions (mounted under both prefixes)
//! GET|POST|OPTIONS /.netlify/functions/get-active-services
//! GET|POST|OPTIONS /.netlify/functions/get-stripe-key
//! GET|POST|OPTIONS /api/get-active-services
//! GET|POST|OPTIONS /api/get-stripe-key
//! ```
//!
//! The `/.netlify/functions` prefix keeps existing frontend fetch URLs working.

pub mod health;
pub mod services;
pub mod stripe;

use axum::{
    Router,
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{MethodRouter, get},
};

use crate::middleware::{cors_headers_middleware, method_not_allowed, preflight};
use crate::state::AppState;

/// Path prefix used by the Netlify runtime.
pub const NETLIFY_PREFIX: &str = "/.netlify/functions";

/// Shorter path prefix for new clients.
pub const API_PREFIX: &str = "/api";

/// Create the health check routes router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Create the function routes router, with CORS headers applied.
pub fn function_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/get-active-services",
            function(services::get_active_services),
        )
        .route("/get-stripe-key", function(stripe::get_stripe_key))
        .layer(from_fn_with_state(state.clone(), cors_headers_middleware))
}

/// GET and POST run `handler`, OPTIONS is a preflight, anything else is 405.
///
/// HEAD is routed explicitly: `get` would otherwise answer it with the GET
/// handler.
fn function<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState> + Clone,
    T: 'static,
{
    get(handler.clone())
        .post(handler)
        .head(method_not_allowed)
        .options(preflight)
        .fallback(method_not_allowed)
}
