//! Product mutations (htmx fragments).
//!
//! Each successful mutation answers with `HX-Trigger: products-changed`, which
//! makes the listing re-fetch itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use tracing::instrument;

use catalog_core::ProductId;

use crate::error::Result;
use crate::forms::{AddProductForm, EditProductForm};
use crate::state::AppState;
use crate::view::{AddFormView, Flash};

const PRODUCTS_CHANGED: (&str, &str) = ("HX-Trigger", "products-changed");

/// Add-product form fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_form.html")]
pub struct AddFormTemplate {
    pub form: AddFormView,
}

/// Edit modal fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/edit_dialog.html")]
pub struct EditDialogTemplate {
    pub id: ProductId,
    pub values: EditProductForm,
    pub error: Option<String>,
}

/// Flash message fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/flash.html")]
pub struct FlashTemplate {
    pub flash: Option<Flash>,
}

/// Create a product from the add form.
#[instrument(skip(state, multipart))]
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let values = AddProductForm::from_multipart(multipart).await?;

    let input = match values.to_input() {
        Ok(input) => input,
        Err(err) => {
            let form = AddFormView::rejected(values, err.to_string());
            return Ok((StatusCode::BAD_REQUEST, AddFormTemplate { form }).into_response());
        }
    };

    match state.catalog().create(&input).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Product created");
            let form = AddFormView::created(product.id);
            Ok((AppendHeaders([PRODUCTS_CHANGED]), AddFormTemplate { form }).into_response())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create product");
            let status = err.status().unwrap_or(StatusCode::BAD_GATEWAY);
            let form = AddFormView::rejected(values, err.user_message());
            Ok((status, AddFormTemplate { form }).into_response())
        }
    }
}

/// Open the edit modal with the product's current values.
#[instrument(skip(state))]
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<EditDialogTemplate> {
    let product = state.catalog().get(id).await?;

    Ok(EditDialogTemplate {
        id,
        values: EditProductForm {
            name: product.name,
            price: product.price.to_string(),
            category: product.category,
            description: product.description,
        },
        error: None,
    })
}

/// Submit the edit modal. Success empties the modal container.
#[instrument(skip(state, values))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(values): Form<EditProductForm>,
) -> Response {
    let input = match values.to_input() {
        Ok(input) => input,
        Err(err) => {
            let dialog = EditDialogTemplate {
                id,
                values,
                error: Some(err.to_string()),
            };
            return (StatusCode::BAD_REQUEST, dialog).into_response();
        }
    };

    match state.catalog().update(id, &input).await {
        Ok(_) => {
            tracing::info!(product_id = %id, "Product updated");
            (AppendHeaders([PRODUCTS_CHANGED]), Html("")).into_response()
        }
        Err(err) => {
            tracing::warn!(product_id = %id, error = %err, "Failed to update product");
            let status = err.status().unwrap_or(StatusCode::BAD_GATEWAY);
            let dialog = EditDialogTemplate {
                id,
                values,
                error: Some(err.user_message().to_string()),
            };
            (status, dialog).into_response()
        }
    }
}

/// Delete a product (confirmed client-side with `hx-confirm`).
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse> {
    let deleted = state.catalog().delete(id).await?;
    tracing::info!(product_id = %id, "Product deleted");

    Ok((
        AppendHeaders([PRODUCTS_CHANGED]),
        FlashTemplate {
            flash: Some(Flash::success(deleted.message)),
        },
    ))
}
