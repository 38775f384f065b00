//! Entity trait implementation for the catalog entry type.
//!
//! This module contains the [`ActorEntity`] implementation that lets
//! [`CatalogEntry`] be managed by the generic [`crate::framework::ResourceActor`],
//! including the stock actions.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{CatalogEntry, Product, ProductCreate, ProductUpdate};

impl ActorEntity for CatalogEntry {
    type Id = String;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    /// Creates a new entry. The id is the product name.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, Self::Error> {
        if id.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "product name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            product: Product::new(id, params.description, params.price),
            stock: params.stock,
            reserved: 0,
        })
    }

    /// Handles updates to the entry.
    ///
    /// # Fields Updated
    /// - `description`, `price`: product details
    /// - `stock`: replaces the stock level; reservations above the new level are dropped
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), Self::Error> {
        if let Some(description) = update.description {
            self.product.description = description;
        }
        if let Some(price) = update.price {
            self.product.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
            self.reserved = self.reserved.min(stock);
        }
        Ok(())
    }

    /// Handles the stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: returns the unreserved level
    /// - `ReserveStock`: holds back up to the requested amount
    /// - `CommitStock`: removes reserved units from stock
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.available())),
            ProductAction::ReserveStock { requested } => {
                let granted = requested.min(self.available());
                self.reserved += granted;
                Ok(ProductActionResult::ReserveStock(granted))
            }
            ProductAction::CommitStock(quantity) => {
                if quantity > self.reserved {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.reserved,
                    });
                }
                self.reserved -= quantity;
                self.stock -= quantity;
                Ok(ProductActionResult::CommitStock(self.stock))
            }
        }
    }
}
