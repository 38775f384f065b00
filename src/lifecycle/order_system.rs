use crate::clients::{OrderClient, ProductClient};
use crate::config::AppConfig;
use crate::notify::OutboxNotifier;
use crate::pricing::{PriceCalculator, PricingError};
use crate::service::OrderService;
use crate::{order_actor, product_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The order service wired to its production collaborators.
pub type ProductionService = OrderService<ProductClient, OrderClient, PriceCalculator, OutboxNotifier>;

/// The running order-processing system.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&AppConfig::default())?;
///
/// system.product_client.add_product(ProductCreate::new(widget, 99)).await?;
/// system.service.order_product(&customer, "Widget", 100).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for the catalog actor
    pub product_client: ProductClient,

    /// Client for the order store actor
    pub order_client: OrderClient,

    /// Shared outbox of every confirmation sent
    pub notifier: OutboxNotifier,

    /// The workflow, holding clones of the clients above
    pub service: ProductionService,

    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns both actors and builds the service. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    /// Fails if the configured pricing policy is invalid.
    pub fn new(config: &AppConfig) -> Result<Self, PricingError> {
        let calculator = PriceCalculator::from_config(&config.pricing)?;
        let buffer_size = config.actors.buffer_size;

        let (product_actor, product_client) = product_actor::new(buffer_size);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_client) = order_actor::new(buffer_size);
        let order_handle = tokio::spawn(order_actor.run());

        let notifier = OutboxNotifier::new();
        let service = OrderService::new(
            product_client.clone(),
            order_client.clone(),
            calculator,
            notifier.clone(),
        )
        .with_config(config.service);

        info!(buffer_size, service = ?service.config(), "Order system started");

        Ok(Self {
            product_client,
            order_client,
            notifier,
            service,
            handles: vec![product_handle, order_handle],
        })
    }

    /// Stops both actors and waits for them to finish.
    ///
    /// # Errors
    /// Returns the first actor task that panicked or was cancelled.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        // Every client clone must go before the actors see their mailbox close.
        drop(self.service);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
