//! Shipping fee rules.

use vitrine_core::Price;

use super::Address;

/// Computes the shipping fee for a deliverable address.
pub trait ShippingRate: Send + Sync {
    /// Fee charged to ship an order to `destination`.
    fn fee(&self, destination: &Address) -> Price;
}

/// The same fee for every destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRate(pub Price);

impl ShippingRate for FlatRate {
    fn fee(&self, _destination: &Address) -> Price {
        self.0
    }
}
