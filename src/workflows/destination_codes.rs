//! Backfill of packing-slip destination codes.

use super::WorkflowError;
use crate::clients::{PackingSlipClient, WorkOrderClient};
use crate::framework::{ActorClient, Query};
use crate::model::{PackingSlip, WorkOrder, WorkOrderId};
use crate::sequencing::{infer_destination_code, DestinationCode};
use crate::work_order_actor::WorkOrderError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument, warn};

/// Outcome of a backfill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub slips_scanned: usize,
    pub lines_scanned: usize,
    pub already_coded: usize,
    pub updated: usize,
    /// Left unset: several `SHIP TO VENDOR` steps.
    pub ambiguous: usize,
    /// Left unset: no usable step, or the line no longer exists.
    pub unresolved: usize,
}

/// Infers a destination code for every packing-slip line that has none.
///
/// Lines that cannot be coded are logged and counted; they are never guessed.
#[instrument(skip(work_orders, packing_slips))]
pub async fn backfill_destination_codes(
    work_orders: &WorkOrderClient,
    packing_slips: &PackingSlipClient,
    default_code: u32,
) -> Result<MigrationReport, WorkflowError> {
    let mut report = MigrationReport::default();
    let mut orders: BTreeMap<WorkOrderId, Option<WorkOrder>> = BTreeMap::new();
    let slips = packing_slips
        .list(Query::filter(|s: &PackingSlip| {
            s.items.iter().any(|i| i.destination_code.is_none())
        }))
        .await?;
    report.slips_scanned = slips.total;

    for slip in slips.items {
        for (index, item) in slip.items.iter().enumerate() {
            report.lines_scanned += 1;
            if item.destination_code.is_some() {
                report.already_coded += 1;
                continue;
            }
            if !orders.contains_key(&item.work_order) {
                let order = match work_orders.require(item.work_order).await {
                    Ok(order) => Some(order),
                    Err(WorkOrderError::NotFound(_)) => None,
                    Err(e) => return Err(e.into()),
                };
                orders.insert(item.work_order, order);
            }
            let ordered = orders
                .get(&item.work_order)
                .and_then(Option::as_ref)
                .and_then(|o| o.item(item.line));
            let Some(ordered) = ordered else {
                warn!(slip = %slip.id, index, work_order = %item.work_order, line = item.line,
                    "Packing slip line has no work order line");
                report.unresolved += 1;
                continue;
            };

            match infer_destination_code(ordered.router.as_ref(), slip.destination, default_code) {
                DestinationCode::Code(code) => {
                    packing_slips.set_destination_code(slip.id, index, code).await?;
                    report.updated += 1;
                }
                DestinationCode::Ambiguous { candidates } => {
                    warn!(slip = %slip.id, index, candidates, "Ambiguous destination code");
                    report.ambiguous += 1;
                }
                DestinationCode::Unresolved => {
                    warn!(slip = %slip.id, index, "Unresolved destination code");
                    report.unresolved += 1;
                }
            }
        }
    }
    info!(?report, "Destination code backfill finished");
    Ok(report)
}
