//! # ActorEntity Trait
//!
//! The contract every shop-floor collection (work orders, lots, shipments, …)
//! implements to be managed by the generic [`ResourceActor`](super::ResourceActor).
//! Associated types pin down the identifier, the create/update DTOs, the
//! resource-specific actions, the injected context and the error type, so a
//! `LotCreate` can never be sent to the shipment actor.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//!
//! The defaults do nothing (`Ok(())` / `None`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors (a packing slip checks its
/// work-order lines, a lot asks whether its job is released). The `Context`
/// is injected at `run()` time rather than at construction ("late binding").
///
/// # Atomicity
/// `on_update` and `handle_action` run against a copy of the stored entity.
/// The copy replaces the stored value only when the hook succeeds, so a hook
/// may mutate `self` freely before discovering that a rule is violated.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier assigned by the actor. Ordered so listings are stable.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `Release`, `Scrap`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per collection rather than per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the assigned ID and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across the collection, if any.
    ///
    /// The actor rejects creates and updates that would duplicate an existing
    /// key with [`FrameworkError::Conflict`](super::FrameworkError::Conflict).
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning an error
    /// keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
