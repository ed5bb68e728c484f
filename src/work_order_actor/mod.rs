//! Work orders: customer orders and their line items.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::WorkOrder;

/// Creates a new WorkOrder actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<WorkOrder>, ResourceClient<WorkOrder>) {
    ResourceActor::new(buffer_size)
}
