//! Catalog Core - Shared types library.
//!
//! This crate provides common types used across the catalog components:
//! - `functions` - Stateless HTTP handlers (services listing, Stripe key)
//! - `cli` - Command-line tools for admin user provisioning
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Service records, type-safe IDs, emails, and the JSON response envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
