//! Page shell and listing fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;
use crate::view::{AddFormView, ListingState};

/// Full page: add form plus a listing that loads itself.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: AddFormView,
    pub listing: ListingState,
}

/// The listing section, swapped in by htmx.
#[derive(Template, WebTemplate)]
#[template(path = "partials/listing.html")]
pub struct ListingTemplate {
    pub listing: ListingState,
}

/// Render the page shell; the listing arrives via `GET /listing`.
pub async fn index() -> IndexTemplate {
    IndexTemplate {
        form: AddFormView::default(),
        listing: ListingState::default().begin_refresh(),
    }
}

/// Re-fetch the full product list from the store.
#[instrument(skip(state))]
pub async fn listing(State(state): State<AppState>) -> ListingTemplate {
    ListingTemplate {
        listing: ListingState::load(state.catalog()).await,
    }
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}
