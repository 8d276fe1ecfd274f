//! Database access for the Supabase `PostgreSQL` instance.
//!
//! ## Tables (owned by Supabase, read-only here)
//!
//! - `services` - Catalog entries shown on the public site
//!
//! Rows are passed through to clients unmodified. Handlers depend on the
//! [`ServiceRepository`] trait so they can be exercised without a database.

pub mod services;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use services::{PgServiceRepository, ServiceRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a lazily connected `PostgreSQL` pool.
///
/// No connection is opened until the first query, so the server starts even
/// when the database is unreachable; requests then fail individually.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection string cannot be parsed.
pub fn create_pool(database_url: &SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}
