use order_service::framework::ActorClient;
use order_service::model::{Customer, OrderKind, Product, ProductCreate};
use order_service::service::mock::{Call, CallLog, MockCalculator, MockNotifier};
use order_service::service::{OrderService, ServiceError};
use order_service::{order_actor, product_actor};

/// Workflow against the real catalog and order store actors, with pricing and
/// notification mocked.
///
/// Pattern 2: Actors + Mocks
/// - Real actors (stock is really decremented, orders really stored)
/// - Mocked calculator and notifier (fixed amount, recorded confirmations)
#[tokio::test]
async fn test_partial_order_against_real_actors() {
    let (catalog_actor, catalog) = product_actor::new(8);
    let (store_actor, store) = order_actor::new(8);
    let catalog_handle = tokio::spawn(catalog_actor.run());
    let store_handle = tokio::spawn(store_actor.run());

    let widget = Product::new("Widget", "A widget", 10);
    catalog
        .add_product(ProductCreate::new(widget.clone(), 99))
        .await
        .expect("Failed to add product");

    let log = CallLog::default();
    let service = OrderService::new(
        catalog.clone(),
        store.clone(),
        MockCalculator::new(&log).returning(1000),
        MockNotifier::new(&log),
    );
    let alice = Customer::new("Alice", "1 Main St");

    let outcome = service
        .order_product(&alice, "Widget", 100)
        .await
        .expect("Order failed");
    let receipt = outcome.receipt().expect("Order was skipped");
    assert_eq!((receipt.fulfilled, receipt.back_ordered), (99, 1));

    // Stock is gone, both lines are stored in order.
    assert_eq!(catalog.stock_level("Widget").await.unwrap(), 0);
    let orders = store.list_orders().await.unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].quantity, 99);
    assert_eq!(orders[0].kind, OrderKind::Fulfilled { amount: 1000 });
    assert_eq!(orders[1].quantity, 1);
    assert!(orders[1].is_back_order());
    assert_eq!(orders[1].id.to_string(), "order_2");

    // The calculator saw the requested quantity, not the fulfilled one.
    assert_eq!(
        log.calls()[0],
        Call::CalculateAmount {
            customer: "Alice".into(),
            product: "Widget".into(),
            quantity: 100
        }
    );
    assert_eq!(
        log.count(|call| matches!(call, Call::SendBackOrderConfirmation { quantity: 1, .. })),
        1
    );

    // A second order finds no stock and is fully back-ordered.
    let outcome = service.order_product(&alice, "Widget", 5).await.unwrap();
    assert_eq!(outcome.receipt().map(|r| r.back_ordered), Some(5));
    assert_eq!(store.list_orders().await.unwrap().len(), 4);

    drop(service);
    drop(catalog);
    drop(store);
    catalog_handle.await.unwrap();
    store_handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_leaves_actors_untouched() {
    let (catalog_actor, catalog) = product_actor::new(8);
    let (store_actor, store) = order_actor::new(8);
    tokio::spawn(catalog_actor.run());
    tokio::spawn(store_actor.run());

    let log = CallLog::default();
    let service = OrderService::new(
        catalog.clone(),
        store.clone(),
        MockCalculator::new(&log),
        MockNotifier::new(&log),
    );

    let result = service
        .order_product(&Customer::new("Bob", "2 Side St"), "Gizmo", 1)
        .await;

    assert_eq!(result, Err(ServiceError::ProductNotFound("Gizmo".to_string())));
    assert!(log.is_empty());
    assert!(store.list().await.unwrap().is_empty());
}
