//! Shipping result area.

use askama::Template;
use askama_web::WebTemplate;

use crate::shipping::ShippingQuote;

/// Shipping result fragment; replaces `#shippingCost`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/shipping.html")]
pub struct ShippingResultTemplate {
    pub message: String,
}

impl From<&ShippingQuote> for ShippingResultTemplate {
    fn from(quote: &ShippingQuote) -> Self {
        Self {
            message: quote.message(),
        }
    }
}
