//! Product CRUD handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use catalog_core::{ApiMessage, ImageUpload, Product, ProductDraft, ProductInput};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::routes::extract::{ApiJson, ProductPathId};
use crate::state::AppState;

/// Image payloads that fail to decode are dropped, not rejected.
fn log_malformed_image(draft: &ProductDraft) {
    if let ImageUpload::Malformed(err) = &draft.image {
        tracing::warn!(error = %err, "Ignoring malformed product image");
    }
}

/// List every product, ordered by id.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}

/// Fetch a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    ProductPathId(id): ProductPathId,
) -> Result<Json<Product>> {
    ProductRepository::new(state.pool())
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(AppError::product_not_found)
}

/// Create a product and return it with its assigned id.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<(StatusCode, Json<Product>)> {
    let draft = input.into_draft()?;
    log_malformed_image(&draft);

    let product = ProductRepository::new(state.pool()).create(&draft).await?;
    tracing::info!(product_id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's fields.
///
/// The stored image survives when the request carries none (or one that
/// fails to decode). A missing product wins over a validation failure.
#[instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    ProductPathId(id): ProductPathId,
    ApiJson(input): ApiJson<ProductInput>,
) -> Result<Json<Product>> {
    let repo = ProductRepository::new(state.pool());

    if !repo.exists(id).await? {
        return Err(AppError::product_not_found());
    }

    let draft = input.into_draft()?;
    log_malformed_image(&draft);

    let product = repo
        .update(id, &draft)
        .await?
        .ok_or_else(AppError::product_not_found)?;
    tracing::info!(product_id = %id, "Product updated");

    Ok(Json(product))
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    ProductPathId(id): ProductPathId,
) -> Result<Json<ApiMessage>> {
    if !ProductRepository::new(state.pool()).delete(id).await? {
        return Err(AppError::product_not_found());
    }
    tracing::info!(product_id = %id, "Product deleted");

    Ok(Json(ApiMessage::new("Product deleted")))
}
