//! Checkout route handlers.
//!
//! ```text
//! GET  /checkout          empty cart -> alert, otherwise -> question
//! POST /checkout/confirm  clear cart -> acknowledgment + cart panel (oob)
//! POST /checkout/cancel   close the dialog, cart untouched
//! ```
//!
//! The question carries the cart revision it describes. A confirmation for
//! an older revision asks again with the current total instead of clearing.

use axum::{Form, extract::State, response::IntoResponse, response::Response};
use serde::Deserialize;
use tracing::instrument;

use crate::checkout::{self, CheckoutOutcome};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::state::AppState;
use crate::views::{CartView, CheckoutDialogTemplate, CheckoutDialogView, CheckoutResultTemplate};

/// Confirm form data.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    pub revision: String,
}

/// Open the checkout dialog (HTMX).
#[instrument(skip(state))]
pub async fn begin(State(state): State<AppState>) -> CheckoutDialogTemplate {
    let step = checkout::begin(&*state.cart().lock().await);
    CheckoutDialogTemplate {
        dialog: CheckoutDialogView::from(&step),
    }
}

/// The shopper accepted the purchase (HTMX).
#[instrument(skip(state))]
pub async fn confirm(
    State(state): State<AppState>,
    Form(form): Form<ConfirmForm>,
) -> Result<Response> {
    let revision: u64 = form
        .revision
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid cart revision {:?}", form.revision)))?;

    let mut cart = state.cart().lock().await;

    let response = match checkout::confirm(&mut cart, revision) {
        CheckoutOutcome::Completed {
            acknowledgment,
            total,
        } => {
            add_breadcrumb("checkout", "Completed", &[("total", &total.to_string())]);
            CheckoutResultTemplate {
                dialog: CheckoutDialogView::alert(acknowledgment),
                cart: CartView::render(&cart).out_of_band(),
            }
            .into_response()
        }
        // Changed or emptied by another request since the dialog opened
        CheckoutOutcome::Changed | CheckoutOutcome::EmptyCart => CheckoutResultTemplate {
            dialog: CheckoutDialogView::from(&checkout::begin(&cart)),
            cart: CartView::render(&cart).out_of_band(),
        }
        .into_response(),
        CheckoutOutcome::Declined => CheckoutDialogTemplate {
            dialog: CheckoutDialogView::closed(),
        }
        .into_response(),
    };

    Ok(response)
}

/// The shopper declined or dismissed the dialog (HTMX).
pub async fn cancel() -> CheckoutDialogTemplate {
    CheckoutDialogTemplate {
        dialog: CheckoutDialogView::closed(),
    }
}
