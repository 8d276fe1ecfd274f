//! Catalog functions library.
//!
//! Stateless HTTP handlers fronting the Supabase database: each request
//! validates its method, makes one call to an external source, and answers
//! with the `{success, data|error}` envelope.
//!
//! The binary in `main.rs` wires configuration, logging, and Sentry around
//! [`app`]; tests drive [`app`] directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let functions = routes::function_routes(&state);

    Router::new()
        .merge(routes::health_routes())
        .nest(routes::NETLIFY_PREFIX, functions.clone())
        .nest(routes::API_PREFIX, functions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
