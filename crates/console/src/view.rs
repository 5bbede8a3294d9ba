//! Display models for the console templates.

use catalog_core::{Product, ProductId};

use crate::api::CatalogClient;
use crate::forms::AddProductForm;

/// A one-line status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// State of the add form between submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFormView {
    pub values: AddProductForm,
    pub flash: Option<Flash>,
}

impl AddFormView {
    /// A cleared form announcing the new product.
    #[must_use]
    pub fn created(id: ProductId) -> Self {
        Self {
            values: AddProductForm::default(),
            flash: Some(Flash::success(format!(
                "Product successfully added! ID: {id}"
            ))),
        }
    }

    /// The submitted values, kept for another attempt.
    #[must_use]
    pub fn rejected(values: AddProductForm, message: impl Into<String>) -> Self {
        Self {
            values,
            flash: Some(Flash::error(message)),
        }
    }
}

/// A product prepared for the listing templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    /// `data:` URL for the embedded image.
    pub image_src: Option<String>,
}

impl ProductView {
    /// Category for the table column.
    #[must_use]
    pub fn category_cell(&self) -> &str {
        if self.category.is_empty() {
            "-"
        } else {
            &self.category
        }
    }

    /// Category for the card grid.
    #[must_use]
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            "Uncategorized"
        } else {
            &self.category
        }
    }

    #[must_use]
    pub fn description_label(&self) -> &str {
        if self.description.is_empty() {
            "No description"
        } else {
            &self.description
        }
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price.to_string(),
            description: product.description,
            category: product.category,
            // Stored bytes carry no media type
            image_src: product
                .image
                .filter(|image| !image.is_empty())
                .map(|image| format!("data:image/jpeg;base64,{}", image.to_base64())),
        }
    }
}

/// Where the listing is in its fetch cycle.
///
/// Every refresh starts over from `Loading` and re-fetches the whole list;
/// nothing is cached between refreshes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is pending.
    Loading,
    /// The latest fetch succeeded.
    Loaded(Vec<ProductView>),
    /// The latest fetch failed; holds the message to show.
    Failed(String),
}

/// Shown in place of the listing when the store cannot be read.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

impl ListingState {
    /// Enter `Loading` from any state.
    #[must_use]
    pub fn begin_refresh(self) -> Self {
        Self::Loading
    }

    /// Fetch the product list and settle into `Loaded` or `Failed`.
    pub async fn load(client: &CatalogClient) -> Self {
        match client.list().await {
            Ok(products) => Self::Loaded(products.into_iter().map(ProductView::from).collect()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load products");
                Self::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Products to render, once loaded.
    #[must_use]
    pub fn products(&self) -> Option<&[ProductView]> {
        match self {
            Self::Loaded(products) => Some(products),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// htmx trigger for the listing container: a pending listing fetches
    /// itself on load; every listing re-fetches after a mutation.
    #[must_use]
    pub const fn hx_trigger(&self) -> &'static str {
        if self.is_pending() {
            "load, products-changed from:body"
        } else {
            "products-changed from:body"
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use catalog_core::{Price, ProductImage};

    use super::*;
    use crate::testing::{spawn_broken_store, spawn_stub_store};

    fn product(category: &str, image: Option<ProductImage>) -> Product {
        Product {
            id: ProductId::new(3),
            name: "Widget".to_string(),
            price: Price::new(Decimal::new(125, 1)),
            description: String::new(),
            category: category.to_string(),
            image,
        }
    }

    #[test]
    fn test_created_form_is_cleared() {
        let view = AddFormView::created(ProductId::new(7));
        assert_eq!(view.values, AddProductForm::default());
        assert_eq!(
            view.flash,
            Some(Flash::success("Product successfully added! ID: 7"))
        );
    }

    #[test]
    fn test_blank_fields_get_placeholders() {
        let view = ProductView::from(product("", None));
        assert_eq!(view.category_cell(), "-");
        assert_eq!(view.category_label(), "Uncategorized");
        assert_eq!(view.description_label(), "No description");
        assert_eq!(view.price, "12.50");
        assert!(view.image_src.is_none());
    }

    #[test]
    fn test_image_becomes_data_url() {
        let image = ProductImage::from_bytes(b"hi".to_vec());
        let view = ProductView::from(product("Tools", Some(image)));
        assert_eq!(view.category_cell(), "Tools");
        assert_eq!(view.image_src.as_deref(), Some("data:image/jpeg;base64,aGk="));
    }

    #[test]
    fn test_only_pending_states_fetch_on_load() {
        assert!(ListingState::Idle.hx_trigger().starts_with("load"));
        assert!(ListingState::Loaded(Vec::new()).begin_refresh().is_pending());
        assert_eq!(
            ListingState::Failed(String::new()).hx_trigger(),
            "products-changed from:body"
        );
    }

    #[tokio::test]
    async fn test_refresh_settles_loaded() {
        let store = spawn_stub_store().await;
        let state = ListingState::load(&CatalogClient::new(&store)).await;
        assert_eq!(state.products(), Some(&[][..]));
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn test_refresh_settles_failed() {
        let store = spawn_broken_store().await;
        let state = ListingState::load(&CatalogClient::new(&store)).await;
        assert_eq!(state.error(), Some(LOAD_FAILED_MESSAGE));
        assert!(state.products().is_none());
    }
}
