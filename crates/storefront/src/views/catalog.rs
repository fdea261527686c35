//! Product grid.

use askama::Template;
use askama_web::WebTemplate;
use vitrine_core::Product;

use crate::messages;

/// One product card.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            image: product.image.clone(),
            price: messages::unit_price(product.price),
        }
    }
}

/// Display data for the whole catalog section.
///
/// Rendering always replaces the section; there is no incremental update.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub cards: Vec<ProductCardView>,
    /// Show the fallback text instead of the grid.
    pub unavailable: bool,
    pub fallback: &'static str,
    pub add_label: &'static str,
}

impl CatalogView {
    /// One card per product, in catalog order. An empty slice renders an
    /// empty grid.
    #[must_use]
    pub fn render(products: &[Product]) -> Self {
        Self {
            cards: products.iter().map(ProductCardView::from).collect(),
            unavailable: false,
            fallback: messages::CATALOG_UNAVAILABLE,
            add_label: messages::ADD_TO_CART,
        }
    }

    /// The "could not load products" fallback.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            cards: Vec::new(),
            unavailable: true,
            fallback: messages::CATALOG_UNAVAILABLE,
            add_label: messages::ADD_TO_CART,
        }
    }
}

/// Catalog section fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog.html")]
pub struct CatalogTemplate {
    pub catalog: CatalogView,
}
