//! Subcommand implementations.
//!
//! Commands write to any [`std::io::Write`] so they can run against a
//! buffer in tests.

pub mod catalog;
pub mod shipping;
pub mod shop;

use std::sync::Arc;

use thiserror::Error;
use vitrine_storefront::catalog::{CatalogClient, CatalogError};
use vitrine_storefront::config::{ConfigError, StorefrontConfig};
use vitrine_storefront::shipping::{FlatRate, ShippingCalculator, ViaCepClient};

/// Errors that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The postal code lookup failed.
    #[error("Shipping quote failed")]
    ShippingFailed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Upstream clients shared by every command.
#[derive(Clone)]
pub struct Clients {
    pub catalog: CatalogClient,
    pub shipping: ShippingCalculator,
}

impl Clients {
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            catalog: CatalogClient::new(http.clone(), &config.catalog),
            shipping: ShippingCalculator::new(
                ViaCepClient::new(http, &config.shipping),
                Arc::new(FlatRate(config.shipping.flat_fee)),
            ),
        }
    }
}
