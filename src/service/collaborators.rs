//! # Collaborator Contracts
//!
//! The four capabilities the order workflow depends on. Each one has a production
//! implementation elsewhere in the crate and a scripted double in [`mock`](super::mock).
//!
//! | Trait | Production implementation |
//! |-------|---------------------------|
//! | [`ProductCatalog`] | [`ProductClient`](crate::clients::ProductClient) |
//! | [`OrderStore`] | [`OrderClient`](crate::clients::OrderClient) |
//! | [`AmountCalculator`] | [`PriceCalculator`](crate::pricing::PriceCalculator) |
//! | [`Notifier`] | [`OutboxNotifier`](crate::notify::OutboxNotifier) |

use crate::model::{Customer, Product};
use crate::notify::NotificationError;
use crate::order_actor::OrderError;
use crate::pricing::PricingError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Product lookup and stock keeping.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Looks a product up by name. A missing product is `Ok(None)`, not an error.
    async fn find_product(&self, name: &str) -> Result<Option<Product>, ProductError>;

    /// Returns how many units of `product` are in stock for a request of `requested`.
    ///
    /// Implementations shared between tasks should set the units aside, so a
    /// concurrent call cannot be told about them too. The catalog actor grants at
    /// most `requested` and holds them until `reduce_stock`.
    async fn available_stock(&self, product: &Product, requested: u32)
        -> Result<u32, ProductError>;

    /// Removes `quantity` units of `product` from stock, out of those set aside
    /// by `available_stock`.
    async fn reduce_stock(&self, product: &Product, quantity: u32) -> Result<(), ProductError>;
}

/// Persistence of fulfilled orders and back-orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn add_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
        amount: u64,
    ) -> Result<(), OrderError>;

    async fn add_back_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), OrderError>;
}

/// Computes the amount charged for an order.
///
/// The customer is passed so discount-aware implementations can use it; list-price
/// implementations ignore it.
#[async_trait]
pub trait AmountCalculator: Send + Sync {
    async fn calculate_amount(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<u64, PricingError>;
}

/// Sends confirmations to customers.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        amount: u64,
        quantity: u32,
    ) -> Result<(), NotificationError>;

    async fn send_back_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), NotificationError>;
}
