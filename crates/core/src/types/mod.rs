//! Core types for the service catalog.

pub mod email;
pub mod envelope;
pub mod id;
pub mod service;

pub use email::{Email, EmailError};
pub use envelope::ApiResponse;
pub use id::*;
pub use service::Service;
