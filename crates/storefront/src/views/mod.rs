//! Display data and templates.
//!
//! View structs carry pre-formatted text; templates only lay it out.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod shipping;

pub use cart::{CartPanelTemplate, CartView};
pub use catalog::{CatalogTemplate, CatalogView, ProductCardView};
pub use checkout::{CheckoutDialogTemplate, CheckoutDialogView, CheckoutResultTemplate};
pub use shipping::ShippingResultTemplate;
