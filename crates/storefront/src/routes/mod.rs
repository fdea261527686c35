//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Storefront page (catalog, cart, shipping form)
//! GET  /health            - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart              - Cart panel
//! POST /cart/add          - Add product (returns cart panel)
//!
//! # Shipping (HTMX fragments)
//! POST /shipping          - Quote shipping (returns result paragraph)
//!
//! # Checkout (HTMX fragments)
//! GET  /checkout          - Alert or confirmation dialog
//! POST /checkout/confirm  - Complete purchase of the revision shown (dialog + cart panel)
//! POST /checkout/cancel   - Close dialog
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod shipping;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::begin))
        .route("/confirm", post(checkout::confirm))
        .route("/cancel", post(checkout::cancel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .nest("/cart", cart_routes())
        .route("/shipping", post(shipping::quote))
        .nest("/checkout", checkout_routes())
}
