//! # Collaborator Doubles
//!
//! Scripted, recording stand-ins for the four collaborators of
//! [`OrderService`](super::OrderService).
//!
//! Every double writes to a shared [`CallLog`], so a test can assert both which
//! collaborators were called and the order they were called in:
//!
//! ```rust,ignore
//! let log = CallLog::default();
//! let catalog = MockCatalog::new(&log).with_product(widget.clone()).with_stock(99);
//! let store = MockOrderStore::new(&log);
//! let calculator = MockCalculator::new(&log).returning(1_000);
//! let notifier = MockNotifier::new(&log);
//!
//! let service = OrderService::new(catalog, store, calculator, notifier);
//! service.order_product(&customer, "Widget", 100).await?;
//!
//! assert_eq!(log.calls()[2], Call::CalculateAmount { .. });
//! ```
//!
//! Responses not scripted fall back to a neutral success: an unknown product is
//! `None`, stock is `0`, the amount is `0`.

use super::{AmountCalculator, Notifier, OrderStore, ProductCatalog};
use crate::model::{Customer, Product};
use crate::notify::NotificationError;
use crate::order_actor::OrderError;
use crate::pricing::PricingError;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// One recorded collaborator call. Customers and products are recorded by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindProduct {
        name: String,
    },
    AvailableStock {
        product: String,
        requested: u32,
    },
    ReduceStock {
        product: String,
        quantity: u32,
    },
    AddOrder {
        customer: String,
        product: String,
        quantity: u32,
        amount: u64,
    },
    AddBackOrder {
        customer: String,
        product: String,
        quantity: u32,
    },
    CalculateAmount {
        customer: String,
        product: String,
        quantity: u32,
    },
    SendOrderConfirmation {
        customer: String,
        product: String,
        amount: u64,
        quantity: u32,
    },
    SendBackOrderConfirmation {
        customer: String,
        product: String,
        quantity: u32,
    },
}

/// Calls recorded across all doubles sharing this log, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    fn record(&self, call: Call) {
        lock(&self.calls).push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        lock(&self.calls).clone()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.calls).is_empty()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        lock(&self.calls).iter().filter(|call| predicate(call)).count()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking test thread must not hide the calls it recorded.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// CATALOG
// =============================================================================

#[derive(Default)]
struct CatalogScript {
    products: HashMap<String, Product>,
    stock: u32,
    find_error: Option<ProductError>,
    stock_error: Option<ProductError>,
    reduce_error: Option<ProductError>,
}

/// Double for [`ProductCatalog`].
#[derive(Clone)]
pub struct MockCatalog {
    log: CallLog,
    script: Arc<Mutex<CatalogScript>>,
}

impl MockCatalog {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            script: Arc::default(),
        }
    }

    /// Makes `find_product` return `product` for its name.
    pub fn with_product(self, product: Product) -> Self {
        lock(&self.script)
            .products
            .insert(product.name.clone(), product);
        self
    }

    /// Value returned by every `available_stock` call.
    pub fn with_stock(self, stock: u32) -> Self {
        lock(&self.script).stock = stock;
        self
    }

    pub fn failing_find(self, error: ProductError) -> Self {
        lock(&self.script).find_error = Some(error);
        self
    }

    pub fn failing_stock(self, error: ProductError) -> Self {
        lock(&self.script).stock_error = Some(error);
        self
    }

    pub fn failing_reduce(self, error: ProductError) -> Self {
        lock(&self.script).reduce_error = Some(error);
        self
    }
}

#[async_trait]
impl ProductCatalog for MockCatalog {
    async fn find_product(&self, name: &str) -> Result<Option<Product>, ProductError> {
        self.log.record(Call::FindProduct {
            name: name.to_string(),
        });
        let script = lock(&self.script);
        match &script.find_error {
            Some(error) => Err(error.clone()),
            None => Ok(script.products.get(name).cloned()),
        }
    }

    async fn available_stock(
        &self,
        product: &Product,
        requested: u32,
    ) -> Result<u32, ProductError> {
        self.log.record(Call::AvailableStock {
            product: product.name.clone(),
            requested,
        });
        let script = lock(&self.script);
        match &script.stock_error {
            Some(error) => Err(error.clone()),
            None => Ok(script.stock),
        }
    }

    async fn reduce_stock(&self, product: &Product, quantity: u32) -> Result<(), ProductError> {
        self.log.record(Call::ReduceStock {
            product: product.name.clone(),
            quantity,
        });
        match &lock(&self.script).reduce_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// ORDER STORE
// =============================================================================

#[derive(Default)]
struct StoreScript {
    order_error: Option<OrderError>,
    back_order_error: Option<OrderError>,
}

/// Double for [`OrderStore`].
#[derive(Clone)]
pub struct MockOrderStore {
    log: CallLog,
    script: Arc<Mutex<StoreScript>>,
}

impl MockOrderStore {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            script: Arc::default(),
        }
    }

    pub fn failing_order(self, error: OrderError) -> Self {
        lock(&self.script).order_error = Some(error);
        self
    }

    pub fn failing_back_order(self, error: OrderError) -> Self {
        lock(&self.script).back_order_error = Some(error);
        self
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn add_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
        amount: u64,
    ) -> Result<(), OrderError> {
        self.log.record(Call::AddOrder {
            customer: customer.name.clone(),
            product: product.name.clone(),
            quantity,
            amount,
        });
        match &lock(&self.script).order_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn add_back_order(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), OrderError> {
        self.log.record(Call::AddBackOrder {
            customer: customer.name.clone(),
            product: product.name.clone(),
            quantity,
        });
        match &lock(&self.script).back_order_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// CALCULATOR
// =============================================================================

/// Double for [`AmountCalculator`].
#[derive(Clone)]
pub struct MockCalculator {
    log: CallLog,
    response: Arc<Mutex<Result<u64, PricingError>>>,
}

impl MockCalculator {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            response: Arc::new(Mutex::new(Ok(0))),
        }
    }

    pub fn returning(self, amount: u64) -> Self {
        *lock(&self.response) = Ok(amount);
        self
    }

    pub fn failing(self, error: PricingError) -> Self {
        *lock(&self.response) = Err(error);
        self
    }
}

#[async_trait]
impl AmountCalculator for MockCalculator {
    async fn calculate_amount(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<u64, PricingError> {
        self.log.record(Call::CalculateAmount {
            customer: customer.name.clone(),
            product: product.name.clone(),
            quantity,
        });
        lock(&self.response).clone()
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

#[derive(Default)]
struct NotifierScript {
    order_error: Option<NotificationError>,
    back_order_error: Option<NotificationError>,
}

/// Double for [`Notifier`].
#[derive(Clone)]
pub struct MockNotifier {
    log: CallLog,
    script: Arc<Mutex<NotifierScript>>,
}

impl MockNotifier {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            script: Arc::default(),
        }
    }

    pub fn failing_order_confirmation(self, error: NotificationError) -> Self {
        lock(&self.script).order_error = Some(error);
        self
    }

    pub fn failing_back_order_confirmation(self, error: NotificationError) -> Self {
        lock(&self.script).back_order_error = Some(error);
        self
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        amount: u64,
        quantity: u32,
    ) -> Result<(), NotificationError> {
        self.log.record(Call::SendOrderConfirmation {
            customer: customer.name.clone(),
            product: product.name.clone(),
            amount,
            quantity,
        });
        match &lock(&self.script).order_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn send_back_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), NotificationError> {
        self.log.record(Call::SendBackOrderConfirmation {
            customer: customer.name.clone(),
            product: product.name.clone(),
            quantity,
        });
        match &lock(&self.script).back_order_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
