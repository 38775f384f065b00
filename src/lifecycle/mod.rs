//! # System Lifecycle
//!
//! Starts the catalog and order store actors, wires them into an [`OrderService`]
//! and shuts them down again.
//!
//! ## Startup
//!
//! [`OrderSystem::new`] creates each actor with the mailbox size from
//! [`AppConfig`](crate::config::AppConfig), spawns it on the current Tokio runtime and
//! keeps its client. The pricing policy is resolved once, so an invalid discount is
//! reported at startup rather than on the first order.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**, including the clones held by the service
//! 2. **Actors detect closure** and log their final state
//! 3. **Await completion** of every actor task
//!
//! Neither actor holds a client of the other, so the dependency graph is acyclic and
//! channel closure is enough to stop both.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber used by the binary. Tests leave it unset.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! [`OrderService`]: crate::service::OrderService

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
