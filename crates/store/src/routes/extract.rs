//! Extractors whose rejections flow through `AppError`.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; these wrappers
//! keep every client-visible failure in the `{"message": ...}` shape.

use std::num::IntErrorKind;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::request::Parts,
};

use catalog_core::ProductId;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// The `{id}` segment of a product route.
///
/// An integer outside the id column's range cannot name a stored product, so
/// it is reported as not found. Only non-numeric text is a bad request.
#[derive(Debug, Clone, Copy)]
pub struct ProductPathId(pub ProductId);

impl<S> FromRequestParts<S> for ProductPathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiPath(raw) = ApiPath::<String>::from_request_parts(parts, state).await?;

        match raw.parse::<ProductId>() {
            Ok(id) => Ok(Self(id)),
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                Err(AppError::product_not_found())
            }
            Err(_) => Err(AppError::BadRequest(format!("Invalid product id: {raw}"))),
        }
    }
}
