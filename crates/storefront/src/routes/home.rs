//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::state::AppState;
use crate::views::{CartView, CatalogView, CheckoutDialogView};

/// Home page template: catalog grid, cart panel, shipping form.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub catalog: CatalogView,
    pub cart: CartView,
    pub dialog: CheckoutDialogView,
}

/// Display the storefront page.
///
/// A catalog failure still renders the page, with the fallback text in
/// place of the grid.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = match state.catalog().list_products().await {
        Ok(products) => CatalogView::render(&products),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products");
            CatalogView::unavailable()
        }
    };

    let cart = CartView::render(&*state.cart().lock().await);

    IndexTemplate {
        catalog,
        cart,
        dialog: CheckoutDialogView::closed(),
    }
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::state::AppState;
    use crate::test_support::{
        UNREACHABLE, config_for, get_request, send, spawn_postal, test_state,
    };

    #[tokio::test]
    async fn test_index_renders_catalog_and_empty_cart() {
        let (state, _catalog) = test_state().await;
        let (status, html) = send(&state, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<h3>Backpack</h3>"));
        assert!(html.contains("<h3>Mens Casual T-Shirt</h3>"));
        assert!(html.contains("Preço: R$ 22.30"));
        assert!(html.contains("Seu carrinho está vazio."));
        assert!(html.contains("hx-post=\"/shipping\""));
        assert!(html.contains("id=\"checkoutDialog\""));
    }

    #[tokio::test]
    async fn test_index_catalog_unavailable() {
        let state = AppState::new(config_for(UNREACHABLE, &spawn_postal().await));
        let (status, html) = send(&state, get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<p>Não foi possível carregar os produtos.</p>"));
        assert!(!html.contains("class=\"product\""));
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _catalog) = test_state().await;
        let (status, body) = send(&state, get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
