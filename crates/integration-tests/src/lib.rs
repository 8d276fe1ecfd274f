//! Integration tests for the service catalog functions.
//!
//! # Running Tests
//!
//! ```bash
//! # Against a running server and a real database
//! export DATABASE_URL=postgres://...
//! export FUNCTIONS_BASE_URL=http://localhost:8888
//! cargo test -p catalog-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `functions_http` - Black-box HTTP tests against a running server
//! - `services_repository` - `PgServiceRepository` against a real database
//!
//! All tests are `#[ignore]`d so a plain `cargo test` needs no external services.

/// Base URL of the running functions server.
#[must_use]
pub fn functions_base_url() -> String {
    std::env::var("FUNCTIONS_BASE_URL").unwrap_or_else(|_| "http://localhost:8888".to_string())
}
