//! Error types for amount calculation.

use thiserror::Error;

/// Errors that can occur while pricing an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// `price * quantity` does not fit in the amount type.
    #[error("Amount overflow: price {price} x quantity {quantity}")]
    Overflow { price: u64, quantity: u32 },

    /// A configured discount is outside 0..=100 percent.
    #[error("Invalid discount: {0}% off")]
    InvalidDiscount(u8),
}
