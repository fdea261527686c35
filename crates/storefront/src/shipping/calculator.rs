//! One-shot shipping quote: validate, look up, price.

use std::sync::Arc;

use tracing::instrument;
use vitrine_core::{PostalCode, Price};

use super::{PostalLookup, ShippingRate, ViaCepClient};
use crate::messages;

/// Outcome of a shipping calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingQuote {
    /// The input does not hold exactly eight digits; nothing was looked up.
    Invalid,
    /// The lookup service does not know the postal code.
    NotFound,
    /// The postal code is deliverable for this fee.
    Fee(Price),
    /// The lookup failed; details are in the logs.
    Failed,
}

impl ShippingQuote {
    /// Plain-language text for the shipping result area.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Invalid => messages::POSTAL_CODE_INVALID.to_string(),
            Self::NotFound => messages::POSTAL_CODE_NOT_FOUND.to_string(),
            Self::Fee(fee) => messages::shipping_fee(fee),
            Self::Failed => messages::SHIPPING_FAILED.to_string(),
        }
    }

    /// The fee, when one was quoted.
    #[must_use]
    pub fn fee(&self) -> Option<Price> {
        match self {
            Self::Fee(fee) => Some(*fee),
            _ => None,
        }
    }
}

/// Turns raw postal code input into a [`ShippingQuote`].
///
/// Every call starts over from validation; there is no retry.
#[derive(Clone)]
pub struct ShippingCalculator {
    lookup: ViaCepClient,
    rate: Arc<dyn ShippingRate>,
}

impl ShippingCalculator {
    /// Create a calculator from a lookup client and a fee rule.
    #[must_use]
    pub fn new(lookup: ViaCepClient, rate: Arc<dyn ShippingRate>) -> Self {
        Self { lookup, rate }
    }

    /// Quote shipping for whatever the user typed.
    #[instrument(skip(self))]
    pub async fn quote(&self, input: &str) -> ShippingQuote {
        let Ok(code) = PostalCode::parse(input) else {
            return ShippingQuote::Invalid;
        };

        match self.lookup.lookup(&code).await {
            Ok(PostalLookup::Found(address)) => ShippingQuote::Fee(self.rate.fee(&address)),
            Ok(PostalLookup::NotFound) => ShippingQuote::NotFound,
            Err(e) => {
                tracing::error!(error = %e, postal_code = %code, "Failed to calculate shipping");
                ShippingQuote::Failed
            }
        }
    }
}
