//! Custom actions for the catalog actor.
//!
//! These actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`CatalogEntry`](crate::model::CatalogEntry).
//!
//! Ordering takes two steps. `ReserveStock` sets units aside in the same message
//! that reads the level, so two concurrent orders can never be granted the same
//! units. `CommitStock` then removes the reserved units from stock.

/// Stock operations on a catalog entry beyond plain CRUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Reports the unreserved stock level without modifying it.
    CheckStock,
    /// Reserves up to `requested` units of unreserved stock.
    ///
    /// Never fails on a short level: it grants what is there, possibly zero.
    ReserveStock { requested: u32 },
    /// Takes previously reserved units out of stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the amount exceeds what is reserved.
    CommitStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    /// Unreserved stock level.
    CheckStock(u32),
    /// Units granted to the caller.
    ReserveStock(u32),
    /// Stock left after the commit.
    CommitStock(u32),
}
