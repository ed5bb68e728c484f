//! Sites: the plants users belong to.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Site;
use crate::framework::{ResourceActor, ResourceClient};

/// Creates a new Site actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Site>, ResourceClient<Site>) {
    ResourceActor::new(buffer_size)
}
