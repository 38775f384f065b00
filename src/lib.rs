//! # Order Service
//!
//! > **An order workflow with injectable collaborators, backed by resource actors.**
//!
//! The core of the crate is [`OrderService::order_product`](service::OrderService::order_product):
//! look a product up, split the request between stock on hand and a back-order,
//! price it, store it, decrement stock and confirm every part to the customer.
//!
//! ## 🏗️ Design
//!
//! The workflow never touches storage directly. It talks to four traits:
//!
//! | Collaborator | Production | Test double |
//! |--------------|------------|-------------|
//! | [`ProductCatalog`](service::ProductCatalog) | [`ProductClient`](clients::ProductClient) | [`MockCatalog`](service::mock::MockCatalog) |
//! | [`OrderStore`](service::OrderStore) | [`OrderClient`](clients::OrderClient) | [`MockOrderStore`](service::mock::MockOrderStore) |
//! | [`AmountCalculator`](service::AmountCalculator) | [`PriceCalculator`](pricing::PriceCalculator) | [`MockCalculator`](service::mock::MockCalculator) |
//! | [`Notifier`](service::Notifier) | [`OutboxNotifier`](notify::OutboxNotifier) | [`MockNotifier`](service::mock::MockNotifier) |
//!
//! The production catalog and order store are in-memory [`ResourceActor`](framework::ResourceActor)s:
//! each runs in its own Tokio task and handles one request at a time, so their
//! state needs no lock. The workflow awaits one collaborator call after another and
//! keeps every intermediate value on its own stack.
//!
//! ## 🚀 Modules
//!
//! - **[service]**: the workflow, its collaborator traits, policies and test doubles
//! - **[framework]**: the generic actor, its client and the actor-level mocks
//! - **[model]**: plain data ([`Customer`](model::Customer), [`Product`](model::Product), [`Order`](model::Order))
//! - **[product_actor]** / **[order_actor]**: entity implementations for the two actors
//! - **[clients]**: typed wrappers that implement the collaborator traits
//! - **[pricing]** / **[notify]**: production calculator and notifier
//! - **[config]**: layered configuration
//! - **[lifecycle]**: startup, shutdown and tracing
//!
//! ## 🧪 Testing
//!
//! Unit tests live next to the code. The `tests/` directory drives the workflow
//! against [`service::mock`] doubles, against real actors, and through a whole
//! [`OrderSystem`](lifecycle::OrderSystem).

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod pricing;
pub mod product_actor;
pub mod service;
