//! # Shopfloor
//!
//! > **A manufacturing-operations backend built from resource-oriented actors.**
//!
//! Work orders, packing slips, shipments, incoming deliveries, jobs with
//! their lots and routers, plus sites and users. Each collection lives in
//! its own actor; the business rules sit in the entities' lifecycle hooks.
//!
//! ## 🚀 Core Concepts
//!
//! ### One actor per collection
//! `ResourceActor<T: ActorEntity>` owns a store and processes its requests
//! one at a time, so no locks are needed. Updates and actions run on a copy
//! of the entity, which is committed only if the hook succeeds.
//!
//! ### Step codes
//! Before a job is released its routers are ordered by position only. On
//! release every step is frozen with a permanent code (100, 200, …) and later
//! insertions take the midpoint of their neighbours (150). See
//! [`sequencing::step_code`].
//!
//! ### Error statuses
//! Each actor has its own `thiserror` enum. Every error maps to an HTTP-style
//! status through [`error::HttpStatus`]: 400 validation, 404 not found, 405
//! business-rule violation, 409 conflict, 500 actor failure.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, client, listing queries and the mock client for tests.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`ShopSystem`](lifecycle::ShopSystem) spins the actors up, wires their
//! dependencies and shuts them down.
//!
//! ### 3. The Interface ([`clients`])
//! One typed client per collection, turning actions into method calls.
//!
//! ### 4. The Collections (`*_actor`)
//! [`ActorEntity`](framework::ActorEntity) implementations with their
//! actions and errors.
//!
//! ### 5. Rules, views and workflows
//! [`sequencing`] holds the pure ordering rules, [`queries`] the read models
//! and [`workflows`] the operations spanning several collections.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! SHOPFLOOR_CONFIG=shopfloor.toml RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod queries;
pub mod sequencing;
pub mod workflows;

pub mod incoming_delivery_actor;
pub mod job_actor;
pub mod lot_actor;
pub mod packing_slip_actor;
pub mod route_step_actor;
pub mod route_template_actor;
pub mod shipment_actor;
pub mod site_actor;
pub mod user_actor;
pub mod work_order_actor;
