//! Product listing commands.
//!
//! # Usage
//!
//! ```bash
//! vitrine products
//! vitrine product 1
//! ```

use std::io::Write;

use vitrine_core::ProductId;
use vitrine_storefront::catalog::CatalogClient;
use vitrine_storefront::messages;
use vitrine_storefront::views::CatalogView;

use super::CommandError;

/// Print one line per product: id, title and price.
///
/// On failure the fallback text is printed before the error is returned.
pub async fn list(catalog: &CatalogClient, out: &mut impl Write) -> Result<(), CommandError> {
    match catalog.list_products().await {
        Ok(products) => {
            write_catalog(out, &CatalogView::render(&products))?;
            Ok(())
        }
        Err(e) => {
            writeln!(out, "{}", messages::CATALOG_UNAVAILABLE)?;
            Err(e.into())
        }
    }
}

/// Render a catalog view as text.
pub fn write_catalog(out: &mut impl Write, view: &CatalogView) -> std::io::Result<()> {
    for card in &view.cards {
        writeln!(out, "{:>4}  {}  ({})", card.id, card.title, card.price)?;
    }
    Ok(())
}

/// Print everything known about one product.
pub async fn show(
    catalog: &CatalogClient,
    id: ProductId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let product = catalog.get_product(id).await?;

    writeln!(out, "{} (#{})", product.title, product.id)?;
    writeln!(out, "{}", messages::unit_price(product.price))?;
    if let Some(category) = &product.category {
        writeln!(out, "Categoria: {category}")?;
    }
    if let Some(rating) = &product.rating {
        writeln!(out, "Avaliação: {:.1} ({} avaliações)", rating.rate, rating.count)?;
    }
    if let Some(description) = &product.description {
        writeln!(out)?;
        writeln!(out, "{description}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", product.image)?;
    Ok(())
}
