//! Lots: sub-batches of a job, with revision letters and special routers.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{JobClient, RouteStepClient};
use crate::framework::{ResourceActor, ResourceClient};
use crate::job_actor::RouterSettings;
use crate::model::Lot;

/// Dependencies injected into the Lot actor.
#[derive(Clone)]
pub struct LotContext {
    pub jobs: JobClient,
    pub steps: RouteStepClient,
    pub settings: RouterSettings,
}

/// Creates a new Lot actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Lot>, ResourceClient<Lot>) {
    ResourceActor::new(buffer_size)
}
