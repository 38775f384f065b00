use serde::{Deserialize, Serialize};

/// A product offered in the catalog.
///
/// `name` is the catalog key. `price` is in minor currency units; amounts are computed
/// by an [`AmountCalculator`](crate::service::AmountCalculator), never by the workflow.
///
/// # Actor Framework
/// Products are stored inside a [`CatalogEntry`], which implements the
/// [`ActorEntity`](crate::framework::ActorEntity) trait.
/// See [`impl ActorEntity for CatalogEntry`](#impl-ActorEntity-for-CatalogEntry) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: u64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Unique product name, used as the catalog key
    /// * `description` - Free text shown to customers
    /// * `price` - Unit price in minor currency units
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

/// A product together with its stock level, as kept by the catalog actor.
///
/// `reserved` counts units granted to orders in flight. They are still part of
/// `stock` until committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product: Product,
    pub stock: u32,
    pub reserved: u32,
}

impl CatalogEntry {
    /// Units nobody has reserved yet.
    pub fn available(&self) -> u32 {
        self.stock - self.reserved
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub stock: u32,
}

impl ProductCreate {
    pub fn new(product: Product, stock: u32) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            stock,
        }
    }
}

// DTOs for catalog updates. `stock` replaces the level, it does not add to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<u32>,
}
