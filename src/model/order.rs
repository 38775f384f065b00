use crate::model::{Customer, Product};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Whether a line was served from stock or deferred until restock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Served from stock and charged `amount`.
    Fulfilled { amount: u64 },
    /// Deferred because stock was short when the request came in.
    BackOrder,
}

/// A stored order line.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub product: Product,
    pub quantity: u32,
    pub kind: OrderKind,
}

impl Order {
    pub fn is_back_order(&self) -> bool {
        matches!(self.kind, OrderKind::BackOrder)
    }

    /// The charged amount, `None` for back-orders.
    pub fn amount(&self) -> Option<u64> {
        match self.kind {
            OrderKind::Fulfilled { amount } => Some(amount),
            OrderKind::BackOrder => None,
        }
    }
}

/// Payload for storing a new order line.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub product: Product,
    pub quantity: u32,
    pub kind: OrderKind,
}
