use super::{
    AmountCalculator, FulfillmentMode, MissingProductPolicy, Notifier, OrderStore,
    ProductCatalog, ServiceConfig, ServiceError, StockSplit,
};
use crate::model::{Customer, Product};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Summary of a placed order, returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub product: String,
    pub requested: u32,
    pub fulfilled: u32,
    pub back_ordered: u32,
    pub amount: u64,
}

/// Result of [`OrderService::order_product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OrderOutcome {
    Placed(OrderReceipt),
    /// The product was unknown and [`MissingProductPolicy::Ignore`] is configured.
    Skipped,
}

impl OrderOutcome {
    pub fn receipt(&self) -> Option<&OrderReceipt> {
        match self {
            OrderOutcome::Placed(receipt) => Some(receipt),
            OrderOutcome::Skipped => None,
        }
    }
}

/// The order workflow.
///
/// Holds its four collaborators and its configuration, nothing else: every
/// intermediate value of a request lives on the stack of `order_product`, so one
/// service can serve any number of calls, in any order, from any task. Stock
/// safety across tasks comes from the catalog: it must not grant the same units
/// to two overlapping calls (see [`ProductCatalog::available_stock`]).
///
/// # Example
///
/// ```rust,ignore
/// let service = OrderService::new(catalog, store, calculator, notifier)
///     .with_config(ServiceConfig::default());
/// let outcome = service.order_product(&customer, "Widget", 100).await?;
/// ```
pub struct OrderService<C, S, A, N> {
    catalog: C,
    store: S,
    calculator: A,
    notifier: N,
    config: ServiceConfig,
}

impl<C, S, A, N> OrderService<C, S, A, N>
where
    C: ProductCatalog,
    S: OrderStore,
    A: AmountCalculator,
    N: Notifier,
{
    pub fn new(catalog: C, store: S, calculator: A, notifier: N) -> Self {
        Self {
            catalog,
            store,
            calculator,
            notifier,
            config: ServiceConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Orders `quantity` units of the product named `product_name` for `customer`.
    ///
    /// Collaborators are called in a fixed sequence: catalog lookup, stock query,
    /// amount calculation, order store, stock decrement, confirmation, then the
    /// back-order store and confirmation when stock falls short. The amount is always
    /// computed on the requested quantity, even when only part of it is in stock.
    ///
    /// # Errors
    /// - [`ServiceError::InvalidQuantity`] for a zero quantity, before any collaborator call.
    /// - [`ServiceError::ProductNotFound`] for an unknown product under
    ///   [`MissingProductPolicy::Reject`].
    /// - Any collaborator error, unmodified. Earlier side effects stay applied.
    #[instrument(skip(self, customer), fields(customer = %customer.name))]
    pub async fn order_product(
        &self,
        customer: &Customer,
        product_name: &str,
        quantity: u32,
    ) -> Result<OrderOutcome, ServiceError> {
        if quantity == 0 {
            warn!("Rejected empty order");
            return Err(ServiceError::InvalidQuantity(quantity));
        }

        let Some(product) = self.catalog.find_product(product_name).await? else {
            return match self.config.missing_product {
                MissingProductPolicy::Reject => {
                    warn!("Product does not exist");
                    Err(ServiceError::ProductNotFound(product_name.to_string()))
                }
                MissingProductPolicy::Ignore => {
                    info!("Product does not exist, nothing ordered");
                    Ok(OrderOutcome::Skipped)
                }
            };
        };
        debug!(?product, "Product found");

        let receipt = match self.config.fulfillment {
            FulfillmentMode::SplitBackOrder => {
                self.place_with_back_order(customer, &product, quantity).await?
            }
            FulfillmentMode::ConfirmOnly => self.confirm_only(customer, &product, quantity).await?,
        };

        info!(
            fulfilled = receipt.fulfilled,
            back_ordered = receipt.back_ordered,
            amount = receipt.amount,
            "Order placed"
        );
        Ok(OrderOutcome::Placed(receipt))
    }

    async fn place_with_back_order(
        &self,
        customer: &Customer,
        product: &Product,
        requested: u32,
    ) -> Result<OrderReceipt, ServiceError> {
        let available = self.catalog.available_stock(product, requested).await?;
        let split = StockSplit::new(requested, available);
        debug!(available, ?split, "Stock checked");

        // The fulfilled part is placed even when nothing is in stock.
        let amount = self
            .place_order(customer, product, requested, split.fulfilled)
            .await?;

        if split.needs_back_order() {
            self.place_back_order(customer, product, split.deferred)
                .await?;
        }

        Ok(OrderReceipt {
            product: product.name.clone(),
            requested,
            fulfilled: split.fulfilled,
            back_ordered: split.deferred,
            amount,
        })
    }

    async fn place_order(
        &self,
        customer: &Customer,
        product: &Product,
        requested: u32,
        fulfilled: u32,
    ) -> Result<u64, ServiceError> {
        let amount = self
            .calculator
            .calculate_amount(customer, product, requested)
            .await?;
        self.store
            .add_order(customer, product, fulfilled, amount)
            .await?;
        self.catalog.reduce_stock(product, fulfilled).await?;
        self.notifier
            .send_order_confirmation(customer, product, amount, fulfilled)
            .await?;
        Ok(amount)
    }

    async fn place_back_order(
        &self,
        customer: &Customer,
        product: &Product,
        deferred: u32,
    ) -> Result<(), ServiceError> {
        self.store
            .add_back_order(customer, product, deferred)
            .await?;
        self.notifier
            .send_back_order_confirmation(customer, product, deferred)
            .await?;
        Ok(())
    }

    async fn confirm_only(
        &self,
        customer: &Customer,
        product: &Product,
        requested: u32,
    ) -> Result<OrderReceipt, ServiceError> {
        let amount = self
            .calculator
            .calculate_amount(customer, product, requested)
            .await?;
        self.notifier
            .send_order_confirmation(customer, product, amount, requested)
            .await?;

        Ok(OrderReceipt {
            product: product.name.clone(),
            requested,
            fulfilled: requested,
            back_ordered: 0,
            amount,
        })
    }
}
