//! Vitrine Core - Shared types and cart state.
//!
//! This crate provides the domain types used across all Vitrine components:
//! - `storefront` - Server-rendered storefront page
//! - `cli` - Terminal client and interactive shop shell
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory state - no I/O, no HTTP
//! clients, no rendering. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, prices, postal codes and catalog products
//! - [`cart`] - The in-memory [`CartStore`](cart::CartStore)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartEntry, CartStore};
pub use types::*;
