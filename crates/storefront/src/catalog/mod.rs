//! Remote product catalog client.
//!
//! # Endpoints
//!
//! ```text
//! GET <base>        -> [{ id, title, price, image, ... }]
//! GET <base>/<id>   -> { id, title, price, image, ... }
//! ```
//!
//! Every call goes to the network. The storefront fetches a product again on
//! each add-to-cart even though the catalog page already showed it; set
//! `CATALOG_CACHE_TTL_SECS` to serve repeat lookups from [`ProductCache`].

mod cache;

pub use cache::ProductCache;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use vitrine_core::{Product, ProductId};

use crate::config::CatalogConfig;

/// Errors that can occur when talking to the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not complete.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status {
        /// Response status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body is not the expected JSON.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the remote product catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Option<ProductCache>,
}

impl CatalogClient {
    /// Create a new catalog client sharing `client`'s connection pool.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
                cache: config.cache_ttl.map(ProductCache::new),
            }),
        }
    }

    /// Fetch the whole product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self.get_json(&self.inner.base_url).await?;
        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    /// Fetch a single product by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    /// The public catalog answers unknown identifiers with an empty body,
    /// which surfaces as [`CatalogError::Decode`].
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(cache) = &self.inner.cache
            && let Some(product) = cache.get(id).await
        {
            debug!("Cache hit for product");
            return Ok(product);
        }

        let url = format!("{}/{id}", self.inner.base_url);
        let product: Product = self.get_json(&url).await?;

        if let Some(cache) = &self.inner.cache {
            cache.insert(product.clone()).await;
        }

        Ok(product)
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Decode(e)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use url::Url;

    use super::*;
    use crate::test_support::{UNREACHABLE, spawn_catalog};

    fn client_for(base_url: &str, cache_ttl: Option<Duration>) -> CatalogClient {
        CatalogClient::new(
            reqwest::Client::new(),
            &CatalogConfig {
                base_url: Url::parse(base_url).unwrap(),
                cache_ttl,
            },
        )
    }

    #[tokio::test]
    async fn test_list_products() {
        let fake = spawn_catalog().await;
        let products = client_for(&fake.base_url, None).list_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Backpack");
        assert_eq!(products[1].price.formatted_amount(), "22.30");
    }

    #[tokio::test]
    async fn test_get_product() {
        let fake = spawn_catalog().await;
        let product = client_for(&fake.base_url, None)
            .get_product(ProductId::new(2))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.title, "Mens Casual T-Shirt");
    }

    #[tokio::test]
    async fn test_unknown_product_is_decode_error() {
        let fake = spawn_catalog().await;
        let err = client_for(&fake.base_url, None)
            .get_product(ProductId::new(404))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_every_lookup_hits_the_network_without_cache() {
        let fake = spawn_catalog().await;
        let client = client_for(&fake.base_url, None);

        client.get_product(ProductId::new(1)).await.unwrap();
        client.get_product(ProductId::new(1)).await.unwrap();

        assert_eq!(fake.product_hits(), 2);
    }

    #[tokio::test]
    async fn test_cache_serves_repeat_lookups() {
        let fake = spawn_catalog().await;
        let client = client_for(&fake.base_url, Some(Duration::from_secs(60)));

        let first = client.get_product(ProductId::new(1)).await.unwrap();
        let second = client.get_product(ProductId::new(1)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fake.product_hits(), 1);
    }

    #[tokio::test]
    async fn test_malformed_list_is_decode_error() {
        let fake = spawn_catalog().await;
        let garbage = fake.base_url.replace("/products", "/garbage");
        let err = client_for(&garbage, None).list_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_error_status() {
        let fake = spawn_catalog().await;
        let down = fake.base_url.replace("/products", "/down");
        let err = client_for(&down, None).list_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        let err = client_for(UNREACHABLE, None).list_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }
}
