//! Catalog Core - Shared product types.
//!
//! This crate provides the types shared by every catalog component:
//! - `store` - The product store HTTP/JSON API
//! - `console` - The browser console that manages products through the store
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP clients. The optional `postgres` feature adds `sqlx`
//! encode/decode support for the ID and price newtypes.
//!
//! # Modules
//!
//! - [`types`] - Product entity, request payloads, IDs, prices and images

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
