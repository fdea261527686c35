//! Cart route handlers.
//!
//! Every handler renders the whole cart panel; the page swaps it in with
//! HTMX. Adding always fetches the product again by id.

use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;
use vitrine_core::ProductId;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::messages;
use crate::state::AppState;
use crate::views::{CartPanelTemplate, CartView};

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Cart panel fragment (HTMX).
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    CartPanelTemplate {
        cart: CartView::render(&*state.cart().lock().await),
    }
}

/// Add a product to the cart (HTMX).
///
/// An upstream failure leaves the cart unchanged and shows a notice in the
/// panel instead of failing the request.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<CartPanelTemplate> {
    let id: ProductId = form
        .product_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid product id {:?}", form.product_id)))?;

    // Fetch before locking; the cart is never held across the request
    let fetched = state.catalog().get_product(id).await;

    let mut cart = state.cart().lock().await;
    let view = match fetched {
        Ok(product) => {
            let quantity = cart.add(product);
            tracing::info!(product_id = %id, quantity, "Added to cart");
            add_breadcrumb("cart", "Added product", &[("product_id", &id.to_string())]);
            CartView::render(&cart)
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Failed to add product to cart");
            CartView::render(&cart).with_notice(messages::ADD_TO_CART_FAILED)
        }
    };

    Ok(CartPanelTemplate { cart: view })
}
