//! Core types for the product catalog.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod id;
pub mod image;
pub mod message;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use image::{ImageDecodeError, ImageUpload, ProductImage};
pub use message::ApiMessage;
pub use price::{Price, PriceParseError};
pub use product::{Product, ProductDraft, ProductInput, ProductValidationError};
