//! In-process fakes of the catalog and postal code services for unit tests.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::config::StorefrontConfig;
use crate::state::AppState;

/// A running fake catalog.
pub struct FakeCatalog {
    /// Base URL of the product collection (`http://127.0.0.1:<port>/products`).
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeCatalog {
    /// Number of product-by-id requests served so far.
    pub fn product_hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Catalog fixture: two products with number prices.
pub fn catalog_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Backpack",
            "price": 10.0,
            "description": "Fits 15 laptops",
            "category": "bags",
            "image": "https://img.example/1.png",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual T-Shirt",
            "price": 22.3,
            "description": "Slim fit",
            "category": "men's clothing",
            "image": "https://img.example/2.png",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ])
}

async fn list_products() -> Json<Value> {
    Json(catalog_products())
}

async fn get_product(
    State(hits): State<Arc<AtomicUsize>>,
    Path(id): Path<String>,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);

    let found = catalog_products()
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"].to_string() == id)
        .cloned();

    match found {
        Some(product) => Json(product).into_response(),
        // Fake Store answers unknown ids with an empty 200 body
        None => (StatusCode::OK, "").into_response(),
    }
}

async fn postal_lookup(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "99999999" => Json(json!({ "erro": true })).into_response(),
        "88888888" => Json(json!({ "erro": "true" })).into_response(),
        "50000000" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "40000000" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!({
            "cep": format!("{}-{}", &code[..5], &code[5..]),
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        }))
        .into_response(),
    }
}

/// Serve `router` on an ephemeral local port and return `http://addr`.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start a fake catalog with `/products`, `/products/{id}` and a broken
/// `/garbage` collection that answers with invalid JSON.
pub async fn spawn_catalog() -> FakeCatalog {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/garbage", get(|| async { "[{\"id\": " }))
        .route("/down", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .with_state(Arc::clone(&hits));

    let origin = spawn(router).await;
    FakeCatalog {
        base_url: format!("{origin}/products"),
        hits,
    }
}

/// Start a fake postal code service and return its `/ws` base URL.
///
/// `99999999` and `88888888` are unknown codes, `50000000` fails with a 500
/// and `40000000` returns a non-JSON body; everything else is found.
pub async fn spawn_postal() -> String {
    let router = Router::new().route("/ws/{code}/json/", get(postal_lookup));
    format!("{}/ws", spawn(router).await)
}

/// Configuration pointing at the given fakes.
pub fn config_for(catalog_url: &str, postal_url: &str) -> StorefrontConfig {
    let catalog_url = catalog_url.to_string();
    let postal_url = postal_url.to_string();
    StorefrontConfig::from_lookup(move |key| match key {
        "CATALOG_API_URL" => Some(catalog_url.clone()),
        "POSTAL_API_URL" => Some(postal_url.clone()),
        _ => None,
    })
    .unwrap()
}

/// An address nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Application state wired to fresh fakes.
pub async fn test_state() -> (AppState, FakeCatalog) {
    let catalog = spawn_catalog().await;
    let postal = spawn_postal().await;
    let state = AppState::new(config_for(&catalog.base_url, &postal));
    (state, catalog)
}

/// Run one request through the full application router.
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, String) {
    let response = crate::app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// A URL-encoded form POST.
pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}
