//! Plain data types shared by the workflow and its collaborators.
//!
//! [`CatalogEntry`] and [`Order`] also implement [`ActorEntity`](crate::framework::ActorEntity)
//! so they can be kept by a [`ResourceActor`](crate::framework::ResourceActor).

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
