//! Optional cache for product-by-id lookups.

use std::time::Duration;

use moka::future::Cache;
use vitrine_core::{Product, ProductId};

/// In-memory product cache keyed by catalog identifier.
#[derive(Clone)]
pub struct ProductCache {
    products: Cache<ProductId, Product>,
}

impl ProductCache {
    /// Create a cache whose entries expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let products = Cache::builder()
            .max_capacity(1000)
            .time_to_live(ttl)
            .build();

        Self { products }
    }

    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).await
    }

    pub async fn insert(&self, product: Product) {
        self.products.insert(product.id, product).await;
    }
}
