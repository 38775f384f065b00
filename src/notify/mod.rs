//! Customer confirmations.
//!
//! [`OutboxNotifier`] logs every confirmation and keeps a copy in an in-memory outbox.
//! Clones share the same outbox.

pub mod error;

pub use error::NotificationError;

use crate::model::{Customer, Product};
use crate::service::Notifier;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::info;

/// A confirmation sent to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Confirmation {
    Order {
        customer: Customer,
        product: Product,
        amount: u64,
        quantity: u32,
    },
    BackOrder {
        customer: Customer,
        product: Product,
        quantity: u32,
    },
}

impl Confirmation {
    pub fn customer(&self) -> &Customer {
        match self {
            Confirmation::Order { customer, .. } | Confirmation::BackOrder { customer, .. } => {
                customer
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutboxNotifier {
    outbox: Arc<Mutex<Vec<Confirmation>>>,
}

impl OutboxNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<Confirmation> {
        match self.outbox.lock() {
            Ok(outbox) => outbox.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, confirmation: Confirmation) -> Result<(), NotificationError> {
        self.outbox
            .lock()
            .map_err(|_| NotificationError::Delivery("outbox lock poisoned".to_string()))?
            .push(confirmation);
        Ok(())
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn send_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        amount: u64,
        quantity: u32,
    ) -> Result<(), NotificationError> {
        info!(
            customer = %customer,
            product = %product.name,
            amount,
            quantity,
            "Order confirmation sent"
        );
        self.push(Confirmation::Order {
            customer: customer.clone(),
            product: product.clone(),
            amount,
            quantity,
        })
    }

    async fn send_back_order_confirmation(
        &self,
        customer: &Customer,
        product: &Product,
        quantity: u32,
    ) -> Result<(), NotificationError> {
        info!(
            customer = %customer,
            product = %product.name,
            quantity,
            "Back-order confirmation sent"
        );
        self.push(Confirmation::BackOrder {
            customer: customer.clone(),
            product: product.clone(),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_outbox_keeps_send_order() {
        let notifier = OutboxNotifier::new();
        let alice = Customer::new("Alice", "1 Main St");
        let widget = Product::new("Widget", "A widget", 10);

        notifier
            .send_order_confirmation(&alice, &widget, 990, 99)
            .await
            .unwrap();
        notifier
            .send_back_order_confirmation(&alice, &widget, 1)
            .await
            .unwrap();

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0],
            Confirmation::Order {
                customer: alice.clone(),
                product: widget.clone(),
                amount: 990,
                quantity: 99
            }
        );
        assert!(matches!(sent[1], Confirmation::BackOrder { quantity: 1, .. }));
        assert_eq!(sent[1].customer(), &alice);
    }

    #[tokio::test]
    async fn test_clones_share_outbox() {
        let notifier = OutboxNotifier::new();
        let clone = notifier.clone();

        clone
            .send_back_order_confirmation(
                &Customer::new("Bob", "2 Side St"),
                &Product::new("Gadget", "", 5),
                3,
            )
            .await
            .unwrap();

        assert_eq!(notifier.sent().len(), 1);
    }
}
