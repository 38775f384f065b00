//! # Order Workflow
//!
//! [`OrderService`] places an order for a named product: it looks the product up,
//! splits the request between stock on hand and a back-order, stores both parts,
//! decrements stock and confirms each part to the customer.
//!
//! The service only sees its collaborators through the traits in [`collaborators`],
//! so it runs unchanged against the actor-backed clients or the doubles in [`mock`].

pub mod collaborators;
pub mod error;
pub mod mock;
pub mod order_service;
pub mod policy;
pub mod split;

pub use collaborators::{AmountCalculator, Notifier, OrderStore, ProductCatalog};
pub use error::ServiceError;
pub use order_service::{OrderOutcome, OrderReceipt, OrderService};
pub use policy::{FulfillmentMode, MissingProductPolicy, ServiceConfig};
pub use split::StockSplit;
