//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Page shell (listing loads itself)
//! GET    /health              - Health check
//! GET    /listing             - Listing fragment (HTMX)
//! POST   /products            - Add form submit, multipart (HTMX)
//! GET    /products/{id}/edit  - Edit modal (HTMX)
//! POST   /products/{id}/edit  - Edit modal submit (HTMX)
//! DELETE /products/{id}       - Delete (HTMX, flash fragment)
//! ```

pub mod pages;
pub mod products;

pub use products::FlashTemplate;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{id}", delete(products::delete))
        .route(
            "/{id}/edit",
            get(products::edit_form).post(products::update),
        )
}

/// Build the complete console router.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config().body_limit_bytes;

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(pages::health))
        .route("/listing", get(pages::listing))
        .nest("/products", product_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
