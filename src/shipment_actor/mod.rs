//! Shipments: packing slips grouped for delivery, with version history.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Shipment;

/// Creates a new Shipment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Shipment>, ResourceClient<Shipment>) {
    ResourceActor::new(buffer_size)
}
