//! Cart panel.

use askama::Template;
use askama_web::WebTemplate;
use vitrine_core::{CartEntry, CartStore};

use crate::messages;

/// Display data for the cart panel.
///
/// Built from scratch after every cart mutation; the page never updates the
/// panel on its own.
#[derive(Debug, Clone)]
pub struct CartView {
    /// `"title - R$ price x quantity"`, in store order.
    pub lines: Vec<String>,
    /// `"Total: R$ x.xx"`, empty when the cart is.
    pub total: String,
    pub is_empty: bool,
    pub empty_text: &'static str,
    /// One-off message shown above the lines, empty for none.
    pub notice: &'static str,
    /// Render as an out-of-band swap alongside another fragment.
    pub oob: bool,
}

fn line(entry: &CartEntry) -> String {
    format!(
        "{} - {} x {}",
        entry.product().title,
        entry.product().price,
        entry.quantity()
    )
}

impl CartView {
    #[must_use]
    pub fn render(cart: &CartStore) -> Self {
        let is_empty = cart.is_empty();
        Self {
            lines: cart.entries().iter().map(line).collect(),
            total: if is_empty {
                String::new()
            } else {
                messages::cart_total(cart.total())
            },
            is_empty,
            empty_text: messages::CART_EMPTY,
            notice: "",
            oob: false,
        }
    }

    /// Attach a one-off notice, such as a failed add.
    #[must_use]
    pub const fn with_notice(mut self, notice: &'static str) -> Self {
        self.notice = notice;
        self
    }

    /// Mark the panel for `hx-swap-oob`.
    #[must_use]
    pub const fn out_of_band(mut self) -> Self {
        self.oob = true;
        self
    }

    /// Whether the checkout control is disabled.
    #[must_use]
    pub const fn checkout_disabled(&self) -> bool {
        self.is_empty
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self::render(cart)
    }
}

/// Cart panel fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart.html")]
pub struct CartPanelTemplate {
    pub cart: CartView,
}
