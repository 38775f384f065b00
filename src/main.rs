use order_service::config::AppConfig;
use order_service::lifecycle::{setup_tracing, OrderSystem};
use order_service::model::{Customer, Product, ProductCreate};
use order_service::service::ServiceError;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    setup_tracing();

    info!("Starting order service demo");
    let system = OrderSystem::new(&config).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("catalog_setup");
    async {
        for (product, stock) in [
            (Product::new("Widget", "A general purpose widget", 250), 101),
            (Product::new("Gadget", "A gadget for every occasion", 1_200), 99),
        ] {
            info!(product = %product.name, stock, "Adding product");
            system
                .product_client
                .add_product(ProductCreate::new(product, stock))
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let customer = Customer::new("Alice", "1 Main St");

    // In stock, short by one, and unknown.
    for name in ["Widget", "Gadget", "Gizmo"] {
        match system.service.order_product(&customer, name, 100).await {
            Ok(outcome) => info!(?outcome, "Order finished"),
            Err(ServiceError::ProductNotFound(name)) => {
                info!(product = %name, "Order rejected, product does not exist")
            }
            Err(e) => error!(error = %e, "Order failed"),
        }
    }

    let orders = system
        .order_client
        .list_orders()
        .await
        .map_err(|e| e.to_string())?;
    for order in &orders {
        info!(
            order_id = %order.id,
            product = %order.product.name,
            quantity = order.quantity,
            back_order = order.is_back_order(),
            "Stored"
        );
    }
    info!(sent = system.notifier.sent().len(), "Confirmations sent");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
