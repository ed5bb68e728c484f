//! Work-order lines that still have quantity left to pack.

use super::QueryError;
use crate::clients::{PackingSlipClient, WorkOrderClient};
use crate::framework::{ActorClient, Query};
use crate::model::{LineRef, WorkOrderId};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingQueueEntry {
    pub work_order: WorkOrderId,
    pub order_number: String,
    pub customer: String,
    pub line: u32,
    pub part_number: String,
    pub part_rev: String,
    pub description: String,
    pub ordered: u32,
    pub packed: u32,
    pub remaining: u32,
}

/// Every line with `ordered - packed > 0`, by work order then line.
#[instrument(skip_all)]
pub async fn packing_queue(
    work_orders: &WorkOrderClient,
    packing_slips: &PackingSlipClient,
) -> Result<Vec<PackingQueueEntry>, QueryError> {
    let mut packed: HashMap<LineRef, u32> = HashMap::new();
    for slip in packing_slips.list(Query::all()).await?.items {
        for item in &slip.items {
            *packed.entry(item.line_ref()).or_default() += item.quantity;
        }
    }

    let mut queue = Vec::new();
    for order in work_orders.list(Query::all()).await?.items {
        for item in &order.items {
            let line = LineRef {
                work_order: order.id,
                line: item.line,
            };
            let packed = packed.get(&line).copied().unwrap_or(0);
            if packed >= item.quantity {
                continue;
            }
            queue.push(PackingQueueEntry {
                work_order: order.id,
                order_number: order.order_number.clone(),
                customer: order.customer.clone(),
                line: item.line,
                part_number: item.part_number.clone(),
                part_rev: item.part_rev.clone(),
                description: item.description.clone(),
                ordered: item.quantity,
                packed,
                remaining: item.quantity - packed,
            });
        }
    }
    queue.sort_by_key(|e| (e.work_order, e.line));
    debug!(entries = queue.len(), "Packing queue assembled");
    Ok(queue)
}
