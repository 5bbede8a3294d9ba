use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use catalog_core::{ApiMessage, Product, ProductId, ProductInput};

use super::error::{ApiError, Operation};

/// Client for the product store API.
///
/// Cheaply cloneable; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the store at `base_url`.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
            }),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.inner.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{id}", self.inner.base_url)
    }

    /// Fetch every product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the store is unreachable or answers with an error.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let request = self.inner.client.get(self.products_url());
        send(Operation::List, request).await
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 if the product does not exist.
    pub async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        let request = self.inner.client.get(self.product_url(id));
        send(Operation::Get, request).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with the store's validation message on a 400.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, ApiError> {
        let request = self.inner.client.post(self.products_url()).json(input);
        send(Operation::Create, request).await
    }

    /// Replace a product's fields. An input without an image keeps the stored one.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on a 404 or 400 from the store.
    pub async fn update(&self, id: ProductId, input: &ProductInput) -> Result<Product, ApiError> {
        let request = self.inner.client.put(self.product_url(id)).json(input);
        send(Operation::Update, request).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 404 if the product does not exist.
    pub async fn delete(&self, id: ProductId) -> Result<ApiMessage, ApiError> {
        let request = self.inner.client.delete(self.product_url(id));
        send(Operation::Delete, request).await
    }
}

async fn send<T: DeserializeOwned>(
    operation: Operation,
    request: RequestBuilder,
) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::Request { operation, source })?;

    let status = response.status();
    if !status.is_success() {
        // Non-JSON error bodies fall back to the per-operation message
        let message = response
            .json::<ApiMessage>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());

        tracing::warn!(status = %status, message = %message, "Store returned an error");
        return Err(ApiError::Api { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Response { operation, source })
}
