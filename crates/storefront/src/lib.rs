//! Vitrine storefront library.
//!
//! A small shop front over a remote product catalog: browse products, keep
//! a cart, quote shipping for a Brazilian postal code and run a simulated
//! checkout. The binary serves it as server-rendered HTML with HTMX
//! fragments; the same clients and checkout flow back the `vitrine` CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod messages;
pub mod routes;
pub mod shipping;
pub mod state;
pub mod views;

#[cfg(test)]
mod test_support;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
