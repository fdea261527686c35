//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod postal_code;
pub mod price;
pub mod product;

pub use id::*;
pub use postal_code::{PostalCode, PostalCodeError};
pub use price::{Price, PriceError};
pub use product::{Product, ProductRating};
