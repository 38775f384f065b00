//! # Observability & Tracing
//!
//! The crate logs through `tracing` with structured fields. Actors log their lifecycle
//! and every request; clients and the workflow open `#[instrument]` spans, so each
//! line shows the request it belongs to.
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO order_product: Order stored order_id=order_1 product="Widget"
//! INFO order_product: Order confirmation sent customer=Alice <1 Main St> product="Widget" amount=1000 quantity=99
//! INFO order_product: Order stored order_id=order_2 product="Widget"
//! INFO order_product: Back-order confirmation sent customer=Alice <1 Main St> product="Widget" quantity=1
//! INFO order_product: Order placed fulfilled=99 back_ordered=1 amount=1000
//! ```
//!
//! `RUST_LOG=debug` adds the full payloads: the product found, the stock split and
//! every actor request.
use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, `info` when unset.
///
/// # Panics
/// Panics if a global subscriber is already installed.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Spans already say where a line comes from.
        .compact()
        .init();
}
