//! Add and edit form handling.
//!
//! Forms are checked here before the store is called, so obviously incomplete
//! input never leaves the console.

use axum::extract::{Multipart, multipart::MultipartError};
use serde::Deserialize;
use thiserror::Error;

use catalog_core::{Price, ProductImage, ProductInput};

/// Client-side validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name and price are required.")]
    MissingRequired,
    #[error("Invalid price")]
    InvalidPrice,
}

/// The add-product form as submitted (`multipart/form-data`).
///
/// Text fields are kept as typed so a failed submission can re-render them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    /// Raw bytes of the chosen file; empty when none was picked.
    pub image: Vec<u8>,
}

impl AddProductForm {
    /// Read the form fields from a multipart body. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MultipartError` if the body is not valid multipart.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, MultipartError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("name") => form.name = field.text().await?,
                Some("price") => form.price = field.text().await?,
                Some("description") => form.description = field.text().await?,
                Some("category") => form.category = field.text().await?,
                Some("image") => form.image = field.bytes().await?.to_vec(),
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validate and build the create payload.
    ///
    /// # Errors
    ///
    /// `MissingRequired` when the trimmed name or the price is blank,
    /// `InvalidPrice` when the price is not a number.
    pub fn to_input(&self) -> Result<ProductInput, FormError> {
        let name = self.name.trim();
        let price = self.price.trim();
        if name.is_empty() || price.is_empty() {
            return Err(FormError::MissingRequired);
        }
        let price = price.parse::<Price>().map_err(|_| FormError::InvalidPrice)?;

        Ok(ProductInput {
            name: Some(name.to_string()),
            price: Some(price),
            description: non_blank(&self.description),
            category: non_blank(&self.category),
            image: (!self.image.is_empty())
                .then(|| ProductImage::from_bytes(self.image.clone()).to_base64()),
        })
    }
}

/// The edit dialog as submitted (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl EditProductForm {
    /// Build the update payload. The image is never sent, so the store keeps
    /// the current one.
    ///
    /// # Errors
    ///
    /// `InvalidPrice` when the price is not a number. A blank name is left
    /// for the store to reject.
    pub fn to_input(&self) -> Result<ProductInput, FormError> {
        let price = self
            .price
            .trim()
            .parse::<Price>()
            .map_err(|_| FormError::InvalidPrice)?;

        Ok(ProductInput {
            name: Some(self.name.clone()),
            price: Some(price),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            image: None,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn add_form(name: &str, price: &str) -> AddProductForm {
        AddProductForm {
            name: name.to_string(),
            price: price.to_string(),
            ..AddProductForm::default()
        }
    }

    #[test]
    fn test_add_form_requires_name_and_price() {
        assert_eq!(add_form("   ", "9.99").to_input(), Err(FormError::MissingRequired));
        assert_eq!(add_form("Widget", "").to_input(), Err(FormError::MissingRequired));
        assert_eq!(
            FormError::MissingRequired.to_string(),
            "Name and price are required."
        );
    }

    #[test]
    fn test_add_form_rejects_non_numeric_price() {
        assert_eq!(add_form("Widget", "cheap").to_input(), Err(FormError::InvalidPrice));
    }

    #[test]
    fn test_add_form_trims_and_drops_blank_optionals() {
        let form = AddProductForm {
            description: "  ".to_string(),
            category: " Tools ".to_string(),
            ..add_form("  Widget ", "9.99")
        };
        let input = form.to_input().unwrap();

        assert_eq!(input.name.as_deref(), Some("Widget"));
        assert_eq!(input.price, Some(Price::new(Decimal::new(999, 2))));
        assert_eq!(input.description, None);
        assert_eq!(input.category.as_deref(), Some("Tools"));
        assert_eq!(input.image, None);
    }

    #[test]
    fn test_add_form_encodes_image() {
        let form = AddProductForm {
            image: vec![0xff, 0xd8, 0xff],
            ..add_form("Widget", "1")
        };
        assert_eq!(form.to_input().unwrap().image.as_deref(), Some("/9j/"));
    }

    #[test]
    fn test_edit_form_sends_all_text_fields_without_image() {
        let form = EditProductForm {
            name: "Widget2".to_string(),
            price: "12.5".to_string(),
            category: String::new(),
            description: String::new(),
        };
        let input = form.to_input().unwrap();

        assert_eq!(input.name.as_deref(), Some("Widget2"));
        assert_eq!(input.category.as_deref(), Some(""));
        assert_eq!(input.image, None);
    }

    #[test]
    fn test_edit_form_rejects_invalid_price() {
        let form = EditProductForm {
            name: "Widget".to_string(),
            price: "twelve".to_string(),
            ..EditProductForm::default()
        };
        assert_eq!(form.to_input(), Err(FormError::InvalidPrice));
    }
}
