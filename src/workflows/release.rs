use super::WorkflowError;
use crate::clients::{JobClient, LotClient};
use crate::lot_actor::LotError;
use crate::model::JobId;
use serde::Serialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub job: JobId,
    pub lots: usize,
    /// Lot router steps that received a code during the release.
    pub lot_steps_coded: usize,
}

/// Releases a job, then freezes the special routers of its lots.
///
/// The job transition is the commit point: once it succeeds the release
/// stands, and a lot that vanished in the meantime is skipped.
#[instrument(skip(jobs, lots))]
pub async fn release_job(
    jobs: &JobClient,
    lots: &LotClient,
    id: JobId,
) -> Result<ReleaseSummary, WorkflowError> {
    let lot_ids = jobs.release(id).await?;
    let mut lot_steps_coded = 0;
    for &lot in &lot_ids {
        match lots.freeze_router(lot).await {
            Ok(coded) => lot_steps_coded += coded,
            Err(LotError::NotFound(_)) => warn!(%lot, "Lot disappeared during release"),
            Err(e) => return Err(e.into()),
        }
    }
    info!(job = %id, lots = lot_ids.len(), lot_steps_coded, "Job released");
    Ok(ReleaseSummary {
        job: id,
        lots: lot_ids.len(),
        lot_steps_coded,
    })
}
