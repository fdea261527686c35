//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;
use vitrine_core::CartStore;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::shipping::{FlatRate, ShippingCalculator, ShippingRate, ViaCepClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the upstream clients and the single
/// process-wide cart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    shipping: ShippingCalculator,
    cart: Mutex<CartStore>,
}

impl AppState {
    /// Create state with the configured flat shipping fee.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let rate = Arc::new(FlatRate(config.shipping.flat_fee));
        Self::with_rate(config, rate)
    }

    /// Create state with a custom fee rule.
    #[must_use]
    pub fn with_rate(config: StorefrontConfig, rate: Arc<dyn ShippingRate>) -> Self {
        // One connection pool for both upstreams
        let http = reqwest::Client::new();
        let catalog = CatalogClient::new(http.clone(), &config.catalog);
        let shipping = ShippingCalculator::new(ViaCepClient::new(http, &config.shipping), rate);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                shipping,
                cart: Mutex::new(CartStore::new()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    #[must_use]
    pub fn shipping(&self) -> &ShippingCalculator {
        &self.inner.shipping
    }

    /// The cart. Never hold the guard across an upstream call.
    #[must_use]
    pub fn cart(&self) -> &Mutex<CartStore> {
        &self.inner.cart
    }
}
