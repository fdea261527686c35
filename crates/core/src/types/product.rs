//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as published by the remote catalog.
///
/// Products are immutable snapshots: the cart keeps the copy it was given
/// and never re-reads the catalog for an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Long description, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog category, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Aggregate customer rating, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<ProductRating>,
}

/// Aggregate customer rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRating {
    /// Average rating value (e.g., 3.9).
    pub rate: f64,
    /// Total number of ratings.
    pub count: u32,
}

impl Product {
    /// Build a product with only the fields the storefront displays.
    #[must_use]
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            description: None,
            category: None,
            rating: None,
        }
    }
}
