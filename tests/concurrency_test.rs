use order_service::config::AppConfig;
use order_service::lifecycle::OrderSystem;
use order_service::model::{Customer, Product, ProductCreate};
use std::sync::Arc;

const ROUNDS: usize = 50;
const TASKS: u32 = 8;
const STOCK: u32 = 100;
const PER_ORDER: u32 = 30;

/// Many tasks ordering the same product at once must never be granted more
/// units than the catalog holds. The shortfall goes to back-orders.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_never_oversell() {
    for round in 0..ROUNDS {
        let system = Arc::new(OrderSystem::new(&AppConfig::default()).unwrap());
        system
            .product_client
            .add_product(ProductCreate::new(
                Product::new("Widget", "A widget", 10),
                STOCK,
            ))
            .await
            .unwrap();

        let tasks: Vec<_> = (0..TASKS)
            .map(|i| {
                let system = Arc::clone(&system);
                tokio::spawn(async move {
                    let customer = Customer::new(format!("Customer{i}"), "Somewhere");
                    system
                        .service
                        .order_product(&customer, "Widget", PER_ORDER)
                        .await
                })
            })
            .collect();

        let mut fulfilled = 0;
        let mut back_ordered = 0;
        for task in tasks {
            let outcome = task.await.unwrap().unwrap_or_else(|e| {
                panic!("round {round}: order failed: {e}");
            });
            let receipt = outcome.receipt().expect("Order was skipped");
            assert_eq!(receipt.fulfilled + receipt.back_ordered, PER_ORDER);
            fulfilled += receipt.fulfilled;
            back_ordered += receipt.back_ordered;
        }
        assert_eq!(fulfilled, STOCK, "round {round}");
        assert_eq!(back_ordered, TASKS * PER_ORDER - STOCK, "round {round}");

        assert_eq!(system.product_client.stock_level("Widget").await.unwrap(), 0);
        let entry = system.product_client.list_products().await.unwrap().remove(0);
        assert_eq!((entry.stock, entry.reserved), (0, 0));

        let orders = system.order_client.list_orders().await.unwrap();
        let stored: u32 = orders
            .iter()
            .filter(|order| !order.is_back_order())
            .map(|order| order.quantity)
            .sum();
        assert_eq!(stored, STOCK, "round {round}");
        assert_eq!(system.notifier.sent().len(), orders.len());

        Arc::into_inner(system)
            .expect("All tasks have finished")
            .shutdown()
            .await
            .unwrap();
    }
}
