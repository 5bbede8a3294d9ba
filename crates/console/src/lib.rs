//! Catalog console.
//!
//! Server-rendered browser UI for the product store. Pages are askama
//! templates; the listing, add form, edit modal and delete action are htmx
//! fragments backed by [`api::CatalogClient`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod routes;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;

pub use routes::build_router;
pub use state::AppState;
