//! Shipping quote route handler.

use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;
use crate::views::ShippingResultTemplate;

/// Shipping form data.
#[derive(Debug, Deserialize)]
pub struct ShippingForm {
    #[serde(default)]
    pub postal_code: String,
}

/// Quote shipping for a postal code (HTMX).
///
/// Always answers with the result paragraph; failures become text.
#[instrument(skip(state))]
pub async fn quote(
    State(state): State<AppState>,
    Form(form): Form<ShippingForm>,
) -> ShippingResultTemplate {
    let quote = state.shipping().quote(&form.postal_code).await;
    ShippingResultTemplate::from(&quote)
}
