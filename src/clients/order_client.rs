use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Customer, Order, OrderCreate, OrderId, OrderKind, Product};
use crate::order_actor::OrderError;
use crate::service::OrderStore;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order store actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Every stored line, fulfilled and back-ordered, in insertion order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    async fn store(&self, payload: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?payload, "Sending create");
        let id = self.inner.create(payload).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");
        Ok(id)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(skip(self, customer, product), fields(customer = %customer.name, product = %product.name))]
    async fn add_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
        amount: u64,
    ) -> Result<(), OrderError> {
        self.store(OrderCreate {
            customer: customer.clone(),
            product: product.clone(),
            quantity,
            kind: OrderKind::Fulfilled { amount },
        })
        .await
        .map(|_| ())
    }

    #[instrument(skip(self, customer, product), fields(customer = %customer.name, product = %product.name))]
    async fn add_back_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), OrderError> {
        self.store(OrderCreate {
            customer: customer.clone(),
            product: product.clone(),
            quantity,
            kind: OrderKind::BackOrder,
        })
        .await
        .map(|_| ())
    }
}
