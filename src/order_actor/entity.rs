//! Entity trait implementation for the Order domain type.
//!
//! Orders are append-only: they have no updates and no custom actions.

use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderKind};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Error = OrderError;

    /// Creates a new Order from creation parameters.
    ///
    /// A fulfilled line may carry zero units (the request found no stock); a
    /// back-order must defer at least one.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.kind == OrderKind::BackOrder && params.quantity == 0 {
            return Err(OrderError::ValidationError(
                "back-order quantity must be positive".to_string(),
            ));
        }
        Ok(Self {
            id,
            customer: params.customer,
            product: params.product,
            quantity: params.quantity,
            kind: params.kind,
        })
    }

    fn on_update(&mut self, _update: ()) -> Result<(), Self::Error> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), Self::Error> {
        Ok(())
    }
}
