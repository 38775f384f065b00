//! # Generic Actor Server
//!
//! `ResourceActor` owns the in-memory store for one entity type and processes
//! requests sequentially, so the store needs no lock.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Function that derives the key of a new entity from its create payload.
pub type AssignId<T> =
    Box<dyn Fn(&<T as ActorEntity>::Create) -> <T as ActorEntity>::Id + Send + Sync>;

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`) and
/// the receiving end of the mailbox. Each actor runs in its own Tokio task and handles
/// one message at a time.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` in a background task.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    assign_id: AssignId<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor with a mailbox of `buffer_size` and its paired client.
    ///
    /// `assign_id` decides the key of every created entity: a counter for
    /// generated ids, or a field of the payload for natural keys.
    pub fn new(
        buffer_size: usize,
        assign_id: impl Fn(&T::Create) -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            assign_id: Box::new(assign_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "CatalogEntry" rather than "order_service::model::product::CatalogEntry"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.handle_create(params);
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => match item.on_update(update) {
                            Ok(()) => Ok(item.clone()),
                            Err(e) => Err(FrameworkError::EntityError(Box::new(e))),
                        },
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item
                            .handle_action(action)
                            .map_err(|e| FrameworkError::EntityError(Box::new(e))),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle_create(&mut self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let id = (self.assign_id)(&params);
        if self.store.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        let item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        self.store.insert(id.clone(), item);
        Ok(id)
    }
}
