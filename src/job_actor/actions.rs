//! Status transitions and router edits for a [`Job`](crate::model::Job).

use crate::model::{LotId, Router, RouterStep};

#[derive(Debug, Clone)]
pub enum JobAction {
    Hold,
    Resume,
    /// Releases the job to the floor and freezes its router's step codes.
    Release,
    Cancel,
    AttachLot(LotId),
    DetachLot(LotId),
    /// Inserts an already resolved step after `insert_after` (`None` = front).
    InsertStep {
        step: RouterStep,
        insert_after: Option<usize>,
    },
    RemoveStep(usize),
    /// Replaces the whole router, e.g. from a route template.
    ReplaceRouter(Router),
}

/// Results from JobActions - variants match 1:1 with JobAction
#[derive(Debug, Clone)]
pub enum JobActionResult {
    Hold(()),
    Resume(()),
    /// The lots whose special routers must be frozen as well.
    Release(Vec<LotId>),
    Cancel(()),
    AttachLot(()),
    DetachLot(()),
    InsertStep(InsertedStep),
    RemoveStep(RouterStep),
    ReplaceRouter(()),
}

/// Where an inserted step landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedStep {
    pub index: usize,
    pub step_code: Option<u32>,
}
