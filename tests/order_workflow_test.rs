//! Workflow tests against scripted collaborators.
//!
//! Pattern 1: Pure Mocks
//! - No actors, every collaborator is a double sharing one call log
//! - Each test scripts the stock level and checks the exact calls made

use order_service::model::{Customer, Product};
use order_service::notify::NotificationError;
use order_service::order_actor::OrderError;
use order_service::pricing::PricingError;
use order_service::product_actor::ProductError;
use order_service::service::mock::{
    Call, CallLog, MockCalculator, MockCatalog, MockNotifier, MockOrderStore,
};
use order_service::service::{
    FulfillmentMode, MissingProductPolicy, OrderOutcome, OrderReceipt, OrderService,
    ServiceConfig, ServiceError,
};

const PRODUCT: &str = "ProductName";
const QUANTITY: u32 = 100;
const AMOUNT: u64 = 1000;

type MockService = OrderService<MockCatalog, MockOrderStore, MockCalculator, MockNotifier>;

fn customer() -> Customer {
    Customer::new("CustomerName", "CustomerAddress")
}

fn product() -> Product {
    Product::new(PRODUCT, "ProductDescription", 10)
}

/// A service whose catalog knows the product and reports `stock` units.
fn service_with_stock(log: &CallLog, stock: u32) -> MockService {
    OrderService::new(
        MockCatalog::new(log).with_product(product()).with_stock(stock),
        MockOrderStore::new(log),
        MockCalculator::new(log).returning(AMOUNT),
        MockNotifier::new(log),
    )
}

fn add_order(quantity: u32) -> Call {
    Call::AddOrder {
        customer: "CustomerName".into(),
        product: PRODUCT.into(),
        quantity,
        amount: AMOUNT,
    }
}

fn reduce_stock(quantity: u32) -> Call {
    Call::ReduceStock {
        product: PRODUCT.into(),
        quantity,
    }
}

fn order_confirmation(quantity: u32) -> Call {
    Call::SendOrderConfirmation {
        customer: "CustomerName".into(),
        product: PRODUCT.into(),
        amount: AMOUNT,
        quantity,
    }
}

fn back_order(quantity: u32) -> Call {
    Call::AddBackOrder {
        customer: "CustomerName".into(),
        product: PRODUCT.into(),
        quantity,
    }
}

fn back_order_confirmation(quantity: u32) -> Call {
    Call::SendBackOrderConfirmation {
        customer: "CustomerName".into(),
        product: PRODUCT.into(),
        quantity,
    }
}

fn calculate(quantity: u32) -> Call {
    Call::CalculateAmount {
        customer: "CustomerName".into(),
        product: PRODUCT.into(),
        quantity,
    }
}

#[tokio::test]
async fn test_missing_product_is_rejected_without_side_effects() {
    let log = CallLog::default();
    let service = OrderService::new(
        MockCatalog::new(&log),
        MockOrderStore::new(&log),
        MockCalculator::new(&log).returning(AMOUNT),
        MockNotifier::new(&log),
    );

    let result = service.order_product(&customer(), PRODUCT, QUANTITY).await;

    assert_eq!(result, Err(ServiceError::ProductNotFound(PRODUCT.to_string())));
    assert_eq!(log.calls(), vec![Call::FindProduct { name: PRODUCT.into() }]);
}

#[tokio::test]
async fn test_missing_product_is_skipped_when_ignored() {
    let log = CallLog::default();
    let service = OrderService::new(
        MockCatalog::new(&log),
        MockOrderStore::new(&log),
        MockCalculator::new(&log),
        MockNotifier::new(&log),
    )
    .with_config(ServiceConfig {
        missing_product: MissingProductPolicy::Ignore,
        ..Default::default()
    });

    let outcome = service
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(outcome, OrderOutcome::Skipped);
    assert_eq!(log.calls(), vec![Call::FindProduct { name: PRODUCT.into() }]);
}

#[tokio::test]
async fn test_retrieves_product_exactly_once() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY + 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| matches!(call, Call::FindProduct { .. })), 1);
    assert_eq!(log.calls()[0], Call::FindProduct { name: PRODUCT.into() });
}

#[tokio::test]
async fn test_places_order_for_items_in_stock() {
    let log = CallLog::default();
    let outcome = service_with_stock(&log, QUANTITY + 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        OrderOutcome::Placed(OrderReceipt {
            product: PRODUCT.into(),
            requested: QUANTITY,
            fulfilled: QUANTITY,
            back_ordered: 0,
            amount: AMOUNT,
        })
    );
    assert_eq!(log.count(|call| *call == add_order(QUANTITY)), 1);
    assert_eq!(log.count(|call| matches!(call, Call::AddBackOrder { .. })), 0);
}

#[tokio::test]
async fn test_sends_confirmation_for_items_ordered() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY + 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == order_confirmation(QUANTITY)), 1);
    assert_eq!(
        log.count(|call| matches!(call, Call::SendBackOrderConfirmation { .. })),
        0
    );
}

#[tokio::test]
async fn test_reduces_stock_when_all_items_in_stock() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY + 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == reduce_stock(QUANTITY)), 1);
}

#[tokio::test]
async fn test_places_back_order_for_items_not_in_stock() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY - 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == back_order(1)), 1);
}

#[tokio::test]
async fn test_reduces_stock_by_items_in_stock_when_short() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY - 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == reduce_stock(QUANTITY - 1)), 1);
}

#[tokio::test]
async fn test_sends_both_confirmations_when_short() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY - 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == order_confirmation(QUANTITY - 1)), 1);
    assert_eq!(log.count(|call| *call == back_order_confirmation(1)), 1);
}

#[tokio::test]
async fn test_amount_is_calculated_on_requested_quantity() {
    let log = CallLog::default();
    let outcome = service_with_stock(&log, QUANTITY - 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(log.count(|call| *call == calculate(QUANTITY)), 1);
    assert_eq!(log.count(|call| *call == calculate(QUANTITY - 1)), 0);
    assert_eq!(outcome.receipt().map(|r| r.amount), Some(AMOUNT));
}

#[tokio::test]
async fn test_collaborators_called_in_order_when_short() {
    let log = CallLog::default();
    service_with_stock(&log, QUANTITY - 1)
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(
        log.calls(),
        vec![
            Call::FindProduct { name: PRODUCT.into() },
            Call::AvailableStock {
                product: PRODUCT.into(),
                requested: QUANTITY
            },
            calculate(QUANTITY),
            add_order(QUANTITY - 1),
            reduce_stock(QUANTITY - 1),
            order_confirmation(QUANTITY - 1),
            back_order(1),
            back_order_confirmation(1),
        ]
    );
}

#[tokio::test]
async fn test_no_stock_still_places_empty_order() {
    let log = CallLog::default();
    let outcome = service_with_stock(&log, 0)
        .order_product(&customer(), PRODUCT, 3)
        .await
        .unwrap();

    let receipt = outcome.receipt().unwrap();
    assert_eq!((receipt.fulfilled, receipt.back_ordered), (0, 3));
    assert_eq!(log.count(|call| *call == add_order(0)), 1);
    assert_eq!(log.count(|call| *call == reduce_stock(0)), 1);
    assert_eq!(log.count(|call| *call == back_order(3)), 1);
}

#[tokio::test]
async fn test_zero_quantity_rejected_before_any_call() {
    let log = CallLog::default();
    let result = service_with_stock(&log, 10)
        .order_product(&customer(), PRODUCT, 0)
        .await;

    assert_eq!(result, Err(ServiceError::InvalidQuantity(0)));
    assert!(log.is_empty());
}

#[tokio::test]
async fn test_same_input_gives_same_outcome() {
    let log = CallLog::default();
    let service = service_with_stock(&log, QUANTITY - 1);

    let first = service
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();
    let first_calls = log.calls();
    log.clear();

    let second = service
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first_calls, log.calls());
}

#[tokio::test]
async fn test_confirm_only_skips_stock_and_store() {
    let log = CallLog::default();
    let outcome = service_with_stock(&log, 1)
        .with_config(ServiceConfig {
            fulfillment: FulfillmentMode::ConfirmOnly,
            ..Default::default()
        })
        .order_product(&customer(), PRODUCT, QUANTITY)
        .await
        .unwrap();

    assert_eq!(
        log.calls(),
        vec![
            Call::FindProduct { name: PRODUCT.into() },
            calculate(QUANTITY),
            order_confirmation(QUANTITY),
        ]
    );
    assert_eq!(outcome.receipt().map(|r| r.back_ordered), Some(0));
}

#[tokio::test]
async fn test_store_failure_propagates_without_rollback() {
    let log = CallLog::default();
    let service = OrderService::new(
        MockCatalog::new(&log).with_product(product()).with_stock(QUANTITY - 1),
        MockOrderStore::new(&log).failing_back_order(OrderError::ValidationError("full".into())),
        MockCalculator::new(&log).returning(AMOUNT),
        MockNotifier::new(&log),
    );

    let result = service.order_product(&customer(), PRODUCT, QUANTITY).await;

    assert_eq!(
        result,
        Err(ServiceError::Store(OrderError::ValidationError("full".into())))
    );
    // The fulfilled part stays placed and the back-order is never confirmed.
    assert_eq!(log.count(|call| *call == reduce_stock(QUANTITY - 1)), 1);
    assert_eq!(log.count(|call| *call == order_confirmation(QUANTITY - 1)), 1);
    assert_eq!(
        log.count(|call| matches!(call, Call::SendBackOrderConfirmation { .. })),
        0
    );
}

#[tokio::test]
async fn test_calculator_failure_stops_before_store() {
    let log = CallLog::default();
    let overflow = PricingError::Overflow {
        price: 10,
        quantity: QUANTITY,
    };
    let service = OrderService::new(
        MockCatalog::new(&log).with_product(product()).with_stock(QUANTITY),
        MockOrderStore::new(&log),
        MockCalculator::new(&log).failing(overflow.clone()),
        MockNotifier::new(&log),
    );

    let result = service.order_product(&customer(), PRODUCT, QUANTITY).await;

    assert_eq!(result, Err(ServiceError::Pricing(overflow)));
    assert_eq!(log.count(|call| matches!(call, Call::AddOrder { .. })), 0);
}

#[tokio::test]
async fn test_catalog_and_notifier_failures_propagate() {
    let log = CallLog::default();
    let service = OrderService::new(
        MockCatalog::new(&log)
            .with_product(product())
            .failing_stock(ProductError::ActorCommunicationError("closed".into())),
        MockOrderStore::new(&log),
        MockCalculator::new(&log),
        MockNotifier::new(&log),
    );
    assert!(matches!(
        service.order_product(&customer(), PRODUCT, QUANTITY).await,
        Err(ServiceError::Catalog(ProductError::ActorCommunicationError(_)))
    ));

    let log = CallLog::default();
    let service = OrderService::new(
        MockCatalog::new(&log).with_product(product()).with_stock(QUANTITY),
        MockOrderStore::new(&log),
        MockCalculator::new(&log).returning(AMOUNT),
        MockNotifier::new(&log)
            .failing_order_confirmation(NotificationError::Delivery("smtp down".into())),
    );
    assert_eq!(
        service.order_product(&customer(), PRODUCT, QUANTITY).await,
        Err(ServiceError::Notification(NotificationError::Delivery(
            "smtp down".into()
        )))
    );
    // Stored and decremented before the confirmation failed.
    assert_eq!(log.count(|call| *call == add_order(QUANTITY)), 1);
    assert_eq!(log.count(|call| *call == reduce_stock(QUANTITY)), 1);
}
