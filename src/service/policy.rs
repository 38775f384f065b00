//! Workflow configuration: what to do with unknown products and how much of the
//! stock-keeping flow to run.

use serde::{Deserialize, Serialize};

/// What `order_product` does when the catalog has no product with the requested name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingProductPolicy {
    /// Fail with [`ServiceError::ProductNotFound`](super::ServiceError::ProductNotFound).
    #[default]
    Reject,
    /// Return [`OrderOutcome::Skipped`](super::OrderOutcome::Skipped) and do nothing.
    Ignore,
}

/// How much of the fulfillment flow runs once the product is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMode {
    /// Check stock, store the in-stock part, decrement stock, back-order the rest.
    #[default]
    SplitBackOrder,
    /// Price the full request and send a single confirmation. No stock or store calls.
    ConfirmOnly,
}

/// Configuration for [`OrderService`](super::OrderService).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub missing_product: MissingProductPolicy,
    pub fulfillment: FulfillmentMode,
}
