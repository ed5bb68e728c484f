//! Incoming deliveries: goods expected back from vendors.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::IncomingDelivery;

/// Creates a new IncomingDelivery actor and its client.
pub fn new(
    buffer_size: usize,
) -> (ResourceActor<IncomingDelivery>, ResourceClient<IncomingDelivery>) {
    ResourceActor::new(buffer_size)
}
