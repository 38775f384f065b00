//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client implements the workflow collaborator trait its actor backs.

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
