//! # Product Client
//!
//! Provides a high-level API for the catalog actor. It wraps a
//! `ResourceClient<CatalogEntry>` and is the production [`ProductCatalog`].
//!
//! `available_stock` reserves what it reports and `reduce_stock` commits that
//! reservation. Each is a single actor message, so orders placed from many tasks
//! at once are never granted the same units.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CatalogEntry, Product, ProductCreate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::service::ProductCatalog;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<CatalogEntry>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<CatalogEntry>) -> Self {
        Self { inner }
    }

    /// Adds a product with its initial stock. Returns the catalog key (the name).
    #[instrument(skip(self, params), fields(product = %params.name))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        name: &str,
        update: ProductUpdate,
    ) -> Result<CatalogEntry, ProductError> {
        debug!(?update, "Sending request");
        self.inner
            .update(name.to_string(), update)
            .await
            .map_err(Self::map_error)
    }

    /// Unreserved stock level of the named product.
    #[instrument(skip(self))]
    pub async fn stock_level(&self, name: &str) -> Result<u32, ProductError> {
        match self.stock_action(name, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected_result(other)),
        }
    }

    /// Every catalog entry, ordered by product name.
    pub async fn list_products(&self) -> Result<Vec<CatalogEntry>, ProductError> {
        self.list().await
    }

    async fn stock_action(
        &self,
        name: &str,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(name.to_string(), action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected_result(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<CatalogEntry> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<CatalogEntry> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(name) => ProductError::NotFound(name),
            FrameworkError::AlreadyExists(name) => ProductError::AlreadyExists(name),
            other => other
                .downcast_entity::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self))]
    async fn find_product(&self, name: &str) -> Result<Option<Product>, ProductError> {
        let entry = self.get(name.to_string()).await?;
        Ok(entry.map(|entry| entry.product))
    }

    #[instrument(skip(self, product), fields(product = %product.name))]
    async fn available_stock(
        &self,
        product: &Product,
        requested: u32,
    ) -> Result<u32, ProductError> {
        let action = ProductAction::ReserveStock { requested };
        match self.stock_action(&product.name, action).await? {
            ProductActionResult::ReserveStock(granted) => {
                debug!(granted, "Stock reserved");
                Ok(granted)
            }
            other => Err(unexpected_result(other)),
        }
    }

    #[instrument(skip(self, product), fields(product = %product.name))]
    async fn reduce_stock(&self, product: &Product, quantity: u32) -> Result<(), ProductError> {
        match self
            .stock_action(&product.name, ProductAction::CommitStock(quantity))
            .await?
        {
            ProductActionResult::CommitStock(remaining) => {
                debug!(remaining, "Stock reduced");
                Ok(())
            }
            other => Err(unexpected_result(other)),
        }
    }
}
