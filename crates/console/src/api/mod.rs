//! HTTP client for the product store API.
//!
//! The console never touches the database; every read and write goes through
//! [`CatalogClient`]. Failed calls carry the store's own `message` when it
//! sent one, otherwise a per-operation fallback.

mod client;
mod error;

pub use client::CatalogClient;
pub use error::{ApiError, Operation};
