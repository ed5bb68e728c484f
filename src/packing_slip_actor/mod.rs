//! Packing slips: goods prepared against work-order lines.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::PackingSlip;

/// Creates a new PackingSlip actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PackingSlip>, ResourceClient<PackingSlip>) {
    ResourceActor::new(buffer_size)
}
