//! Route templates: reusable router blueprints.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::RouteTemplate;

/// Creates a new RouteTemplate actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<RouteTemplate>, ResourceClient<RouteTemplate>) {
    ResourceActor::new(buffer_size)
}
