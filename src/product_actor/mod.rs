//! # Catalog Actor
//!
//! The catalog actor keeps every [`CatalogEntry`] keyed by product name and serves
//! the stock actions the order workflow relies on. Stock is reserved and then
//! committed, so concurrent orders never share units.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`CatalogEntry`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_service::model::{Product, ProductCreate};
//! use order_service::product_actor;
//! use order_service::service::ProductCatalog;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let widget = Product::new("Widget", "A widget", 10);
//!     client.add_product(ProductCreate::new(widget.clone(), 100)).await?;
//!     let granted = client.available_stock(&widget, 5).await?;
//!     client.reduce_stock(&widget, granted).await?;
//!     assert_eq!(client.stock_level("Widget").await?, 95);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::{CatalogEntry, ProductCreate};

/// Creates a new catalog actor and its client. Entries are keyed by product name.
pub fn new(buffer_size: usize) -> (ResourceActor<CatalogEntry>, ProductClient) {
    let (actor, generic_client) =
        ResourceActor::<CatalogEntry>::new(buffer_size, |params: &ProductCreate| params.name.clone());
    (actor, ProductClient::new(generic_client))
}
