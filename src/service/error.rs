//! Error types for the order workflow.

use crate::notify::NotificationError;
use crate::order_actor::OrderError;
use crate::pricing::PricingError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors returned by [`OrderService::order_product`](super::OrderService::order_product).
///
/// Collaborator failures are wrapped unmodified; side effects applied before the
/// failure are not rolled back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The named product is not in the catalog.
    #[error("Product does not exist in catalog: {0}")]
    ProductNotFound(String),

    /// The requested quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error(transparent)]
    Catalog(#[from] ProductError),

    #[error(transparent)]
    Store(#[from] OrderError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}
