//! Postal code lookup and shipping quotes.
//!
//! # Flow
//!
//! ```text
//! raw input --strip non-digits--> 8 digits? --no--> Invalid
//!                                     | yes
//!                                  ViaCEP lookup --erro--> NotFound
//!                                     |         \--fail--> Failed
//!                                   Found --ShippingRate--> Fee
//! ```
//!
//! The fee itself is a stub: [`FlatRate`] charges the configured amount for
//! every known postal code.

mod calculator;
mod client;
mod rate;

pub use calculator::{ShippingCalculator, ShippingQuote};
pub use client::{Address, PostalLookup, ViaCepClient};
pub use rate::{FlatRate, ShippingRate};

use thiserror::Error;

/// Errors that can occur when looking up a postal code.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// The request could not complete.
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Postal code service returned HTTP {status}")]
    Status {
        /// Response status code.
        status: u16,
    },

    /// The response body is not the expected JSON.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}
