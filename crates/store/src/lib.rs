//! Catalog product store.
//!
//! A small HTTP/JSON CRUD service over a single `PostgreSQL` table. The
//! binary in `main.rs` wires configuration, tracing and Sentry around the
//! router built here; integration tests drive the same router directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
