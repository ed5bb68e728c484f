//! Catalog of process steps that routers and templates are built from.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::RouteStep;

/// Creates a new RouteStep actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<RouteStep>, ResourceClient<RouteStep>) {
    ResourceActor::new(buffer_size)
}
