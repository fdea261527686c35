//! Request errors and Sentry breadcrumbs.
//!
//! Upstream failures never reach `AppError`: handlers log them with
//! `tracing::error!` (which the Sentry tracing layer turns into events) and
//! show the shopper a message in the page. `AppError` is only for requests
//! the page itself would never send.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::info!(error = %self, "Rejected request");

        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for a shopper action.
///
/// Breadcrumbs appear in Sentry error reports as the trail leading up to an
/// error.
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product", &[("product_id", "1")]);
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    sentry::add_breadcrumb(breadcrumb);
}
