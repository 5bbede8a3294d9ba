//! In-process stand-ins for the product store, served on ephemeral ports.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use url::Url;

use catalog_core::{ApiMessage, Product, ProductId, ProductImage, ProductInput};

type Products = Arc<Mutex<Vec<Product>>>;

async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiMessage::new("Product not found")),
    )
        .into_response()
}

fn apply(id: ProductId, input: ProductInput, previous: Option<&Product>) -> Result<Product, Response> {
    let draft = input.into_draft().map_err(|err| {
        (StatusCode::BAD_REQUEST, Json(ApiMessage::new(err.to_string()))).into_response()
    })?;
    let image = draft
        .image
        .bytes()
        .map(|bytes| ProductImage::from_bytes(bytes.to_vec()))
        .or_else(|| previous.and_then(|p| p.image.clone()));

    Ok(Product {
        id,
        name: draft.name,
        price: draft.price,
        description: draft.description,
        category: draft.category,
        image,
    })
}

async fn list(State(products): State<Products>) -> Json<Vec<Product>> {
    Json(products.lock().unwrap().clone())
}

async fn create(State(products): State<Products>, Json(input): Json<ProductInput>) -> Response {
    let mut products = products.lock().unwrap();
    let next_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;
    match apply(ProductId::new(next_id), input, None) {
        Ok(product) => {
            products.push(product.clone());
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(response) => response,
    }
}

async fn show(State(products): State<Products>, Path(id): Path<ProductId>) -> Response {
    let products = products.lock().unwrap();
    products
        .iter()
        .find(|p| p.id == id)
        .map_or_else(not_found, |p| Json(p.clone()).into_response())
}

async fn update(
    State(products): State<Products>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Response {
    let mut products = products.lock().unwrap();
    let Some(existing) = products.iter_mut().find(|p| p.id == id) else {
        return not_found();
    };
    match apply(id, input, Some(&*existing)) {
        Ok(product) => {
            *existing = product.clone();
            Json(product).into_response()
        }
        Err(response) => response,
    }
}

async fn remove(State(products): State<Products>, Path(id): Path<ProductId>) -> Response {
    let mut products = products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
        return not_found();
    }
    Json(ApiMessage::new("Product deleted")).into_response()
}

/// A working in-memory store with the same routes and messages as the real one.
pub async fn spawn_stub_store() -> Url {
    let router = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(show).put(update).delete(remove))
        .with_state(Products::default());
    serve(router).await
}

/// A store that answers every request with a plain-text 500.
pub async fn spawn_broken_store() -> Url {
    let router = Router::new().fallback(|| async {
        (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
    });
    serve(router).await
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}
