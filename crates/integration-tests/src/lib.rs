//! Integration tests for Vitrine.
//!
//! Every test starts its own storefront on an ephemeral port, wired to
//! in-process fakes of the catalog and postal code services, and talks to
//! it over real sockets with `reqwest`. Nothing outside the process is
//! contacted.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Fixtures
//!
//! | Service | Input | Answer |
//! |---|---|---|
//! | catalog | `GET /products` | [`catalog_products`] |
//! | catalog | `GET /products/{id}` | the product, or an empty `200` body |
//! | postal | `99999999` | `{"erro": true}` |
//! | postal | `50000000` | `500` |
//! | postal | anything else | an address in São Paulo |

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::state::AppState;

/// Catalog fixture, in Fake Store shape with number prices.
#[must_use]
pub fn catalog_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://img.example/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual T-Shirt",
            "price": 22.3,
            "description": "Slim-fitting style",
            "category": "men's clothing",
            "image": "https://img.example/2.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 5,
            "title": "Dragon Station Chain Bracelet",
            "price": 695,
            "category": "jewelery",
            "image": "https://img.example/5.jpg"
        }
    ])
}

#[derive(Clone, Default)]
struct Upstream {
    product_hits: Arc<AtomicUsize>,
    catalog_down: Arc<AtomicBool>,
}

async fn list_products(State(upstream): State<Upstream>) -> Response {
    if upstream.catalog_down.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(catalog_products()).into_response()
}

async fn get_product(State(upstream): State<Upstream>, Path(id): Path<String>) -> Response {
    upstream.product_hits.fetch_add(1, Ordering::SeqCst);
    if upstream.catalog_down.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    let found = catalog_products()
        .as_array()
        .into_iter()
        .flatten()
        .find(|product| product["id"].to_string() == id)
        .cloned();

    match found {
        Some(product) => Json(product).into_response(),
        None => (StatusCode::OK, "").into_response(),
    }
}

async fn postal_lookup(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "99999999" => Json(json!({ "erro": true })).into_response(),
        "50000000" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({
            "cep": code,
            "logradouro": "Praça da Sé",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        }))
        .into_response(),
    }
}

/// Serve `router` on an ephemeral local port and return `http://addr`.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{addr}")
}

/// Fake catalog and postal code services.
pub struct FakeUpstreams {
    /// Product collection URL, e.g. `http://127.0.0.1:1234/products`.
    pub catalog_url: String,
    /// Postal lookup base URL, e.g. `http://127.0.0.1:1234/ws`.
    pub postal_url: String,
    upstream: Upstream,
}

impl FakeUpstreams {
    pub async fn start() -> Self {
        let upstream = Upstream::default();
        let router = Router::new()
            .route("/products", get(list_products))
            .route("/products/{id}", get(get_product))
            .route("/ws/{code}/json/", get(postal_lookup))
            .with_state(upstream.clone());
        let origin = serve(router).await;

        Self {
            catalog_url: format!("{origin}/products"),
            postal_url: format!("{origin}/ws"),
            upstream,
        }
    }

    /// Product-by-id requests served so far.
    #[must_use]
    pub fn product_hits(&self) -> usize {
        self.upstream.product_hits.load(Ordering::SeqCst)
    }

    /// Make every catalog request fail with `503`.
    pub fn set_catalog_down(&self, down: bool) {
        self.upstream.catalog_down.store(down, Ordering::SeqCst);
    }

    /// Storefront configuration pointing at these fakes, plus `extra`
    /// variables.
    #[must_use]
    pub fn config(&self, extra: &[(&str, &str)]) -> StorefrontConfig {
        let catalog_url = self.catalog_url.clone();
        let postal_url = self.postal_url.clone();
        let extra: Vec<(String, String)> = extra
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        StorefrontConfig::from_lookup(move |key| match key {
            "CATALOG_API_URL" => Some(catalog_url.clone()),
            "POSTAL_API_URL" => Some(postal_url.clone()),
            _ => extra
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
        })
        .expect("Invalid test configuration")
    }
}

/// A running storefront and its fakes.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
    pub upstreams: FakeUpstreams,
    pub state: AppState,
}

impl TestContext {
    /// Start with default configuration.
    pub async fn start() -> Self {
        Self::start_with(&[]).await
    }

    /// Start with extra configuration variables.
    pub async fn start_with(extra: &[(&str, &str)]) -> Self {
        let upstreams = FakeUpstreams::start().await;
        let state = AppState::new(upstreams.config(extra));
        let base_url = serve(vitrine_storefront::app(state.clone())).await;

        Self {
            client: reqwest::Client::new(),
            base_url,
            upstreams,
            state,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`, returning status and body text.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read response"))
    }

    /// Form `POST path`, returning status and body text.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("Request failed");
        let status = resp.status();
        (status, resp.text().await.expect("Failed to read response"))
    }

    /// Open the checkout dialog and accept it straight away.
    pub async fn confirm_checkout(&self) -> (reqwest::StatusCode, String) {
        let (_, dialog) = self.get("/checkout").await;
        let revision = dialog_revision(&dialog).unwrap_or_default();
        self.post_form("/checkout/confirm", &[("revision", revision.as_str())])
            .await
    }
}

/// Cart revision a checkout dialog's confirm button posts back.
#[must_use]
pub fn dialog_revision(html: &str) -> Option<String> {
    html.split("name=\"revision\" value=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .map(str::to_string)
}
