//! Jobs: units of production work, their status and their router.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Job;

/// Step-code numbering shared by job and lot routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterSettings {
    pub step_code_increment: u32,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            step_code_increment: 100,
        }
    }
}

/// Creates a new Job actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Job>, ResourceClient<Job>) {
    ResourceActor::new(buffer_size)
}
