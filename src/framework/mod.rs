//! Generic actor framework for in-memory resources.
//!
//! The catalog and the order store are both plain entities managed by the same
//! [`ResourceActor`]; only the entity types differ.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the entities and processes requests
//! - [`ResourceClient`] - Typed async client for a `ResourceActor`
//! - [`ActorClient`] - Shared read operations for resource-specific client wrappers
//! - [`FrameworkError`] - Errors raised by the plumbing
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{AssignId, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
