use crate::model::{JobId, LotId, RouteStepId, Router};
use serde::{Deserialize, Serialize};

/// A sub-batch of a job.
///
/// A lot follows its job's router until it gets a special router of its
/// own; the special router is seeded from the job router on first edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    pub job: JobId,
    pub number: String,
    pub quantity: u32,
    pub rev: Option<String>,
    pub special_router: Option<Router>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotCreate {
    pub job: JobId,
    pub number: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotUpdate {
    pub quantity: Option<u32>,
}

/// Request to add a catalog step to a lot's special router.
///
/// Fields are optional so that an incomplete request can be answered with a
/// 400 rather than failing to decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsertStepRequest {
    pub step: Option<RouteStepId>,
    /// Index of the step to insert after; `None` inserts at the front.
    pub insert_after: Option<usize>,
    pub description: Option<String>,
}
