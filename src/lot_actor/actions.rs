//! Scrap and special-router operations on a [`Lot`](crate::model::Lot).

use crate::job_actor::InsertedStep;
use crate::model::{InsertStepRequest, Router, RouterStep};

#[derive(Debug, Clone)]
pub enum LotAction {
    /// Scraps the lot and bumps its revision letter.
    Scrap,
    /// Inserts a catalog step into the lot's special router.
    InsertStep(InsertStepRequest),
    RemoveStep(usize),
    /// Assigns codes to every uncoded step of the special router.
    FreezeRouter,
    ReplaceRouter(Router),
}

/// Results from LotActions - variants match 1:1 with LotAction
#[derive(Debug, Clone)]
pub enum LotActionResult {
    /// The new revision letter.
    Scrap(String),
    InsertStep(InsertedStep),
    RemoveStep(RouterStep),
    /// Number of steps that received a code.
    FreezeRouter(usize),
    ReplaceRouter(()),
}
