//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every in-memory resource (catalog entries,
//! stored orders) implements to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! It names the associated types for ids, DTOs, actions and errors, and provides
//! the hooks the actor calls (`from_create_params`, `on_update`, `handle_action`).
//!
//! Hooks are synchronous and see only the entity itself. An action that must be
//! atomic (e.g. reserving stock) is atomic because the actor runs one hook at a time.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this entity. Ordered so listings are deterministic.
    type Id: Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug + 'static;

    /// Resource-specific operations (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug + 'static;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug + 'static;

    /// One error enum per resource, not one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its assigned id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
