//! The product entity and its request payloads.
//!
//! `ProductInput` is what clients send on create and update. Every field is
//! optional at the serde level so a missing `name` or `price` becomes a
//! validation error with a readable message rather than a body rejection.
//! `ProductInput::into_draft` applies the application-level rules and yields a
//! `ProductDraft` that is safe to persist.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::image::{ImageUpload, ProductImage};
use super::price::Price;

/// A catalog product as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned ID.
    pub id: ProductId,
    /// Display name (never empty).
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Free-form description, `""` when not set.
    pub description: String,
    /// Category label, `""` when not set.
    pub category: String,
    /// Embedded image, base64 on the wire, `null` when absent.
    pub image: Option<ProductImage>,
}

/// Body of a create or update request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Base64-encoded image bytes (no `data:` prefix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Validation failures for product payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProductValidationError {
    /// `name` is missing/blank or `price` is missing.
    #[error("Name and price are required")]
    MissingRequired,
    /// `price` does not fit the stored precision.
    #[error("Price is out of range")]
    PriceOutOfRange,
}

/// A validated product payload, ready to be written.
///
/// Scalar fields are complete: an omitted description or category is the
/// empty string, so an update replaces every scalar column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub image: ImageUpload,
}

impl ProductInput {
    /// Validate the payload and fill in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ProductValidationError::MissingRequired` if `name` is absent
    /// or blank, or if `price` is absent, and `PriceOutOfRange` if the price
    /// has more than ten integer digits.
    pub fn into_draft(self) -> Result<ProductDraft, ProductValidationError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ProductValidationError::MissingRequired)?;
        let price = self.price.ok_or(ProductValidationError::MissingRequired)?;
        if !price.fits_storage() {
            return Err(ProductValidationError::PriceOutOfRange);
        }

        Ok(ProductDraft {
            name,
            price,
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image: ImageUpload::from_field(self.image.as_deref()),
        })
    }
}
