//! Generic resource-actor framework.
//!
//! Every collection of the shop-floor system (work orders, jobs, lots, …) is
//! a [`ResourceActor`] over an [`ActorEntity`]; typed clients wrap the generic
//! [`ResourceClient`] and implement [`ActorClient`].
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::{Page, Predicate, Query, SortOrder};
