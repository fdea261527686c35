//! Checkout dialog.
//!
//! The web stand-in for a blocking alert/confirm: one `#checkoutDialog`
//! element that is either closed, an alert with a single dismiss button, or
//! a question with confirm and cancel buttons. The dialog opens modally, so
//! the page behind it is inert until it is answered, and the confirm button
//! posts back the cart revision the question was built from.

use askama::Template;
use askama_web::WebTemplate;

use super::CartView;
use crate::checkout::CheckoutStep;

#[derive(Debug, Clone, Default)]
pub struct CheckoutDialogView {
    pub open: bool,
    /// Offer confirm/cancel instead of a single dismiss button.
    pub confirm: bool,
    /// Message paragraphs.
    pub lines: Vec<String>,
    /// Cart revision posted back on confirm; empty for alerts.
    pub revision: String,
}

impl CheckoutDialogView {
    /// No dialog on screen.
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// A message the shopper only has to dismiss.
    #[must_use]
    pub fn alert(message: &str) -> Self {
        Self {
            open: true,
            confirm: false,
            lines: paragraphs(message),
            revision: String::new(),
        }
    }

    /// A yes/no question about the cart at `revision`.
    #[must_use]
    pub fn question(message: &str, revision: u64) -> Self {
        Self {
            open: true,
            confirm: true,
            lines: paragraphs(message),
            revision: revision.to_string(),
        }
    }
}

impl From<&CheckoutStep> for CheckoutDialogView {
    fn from(step: &CheckoutStep) -> Self {
        match step {
            CheckoutStep::EmptyCart { alert } => Self::alert(alert),
            CheckoutStep::Confirm {
                prompt, revision, ..
            } => Self::question(prompt, *revision),
        }
    }
}

fn paragraphs(message: &str) -> Vec<String> {
    message
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Dialog fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_dialog.html")]
pub struct CheckoutDialogTemplate {
    pub dialog: CheckoutDialogView,
}

/// Dialog fragment plus an out-of-band cart panel, sent after the cart
/// changed.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub dialog: CheckoutDialogView,
    pub cart: CartView,
}
