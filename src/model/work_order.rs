/// Permanent record of a customer order.
///
/// Work orders are never deleted; packing slips, shipments and the packing
/// queue all refer back to their line items.
use crate::model::{Router, WorkOrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub order_number: String,
    pub customer: String,
    pub items: Vec<WorkOrderItem>,
    pub created_at: DateTime<Utc>,
}

impl WorkOrder {
    pub fn item(&self, line: u32) -> Option<&WorkOrderItem> {
        self.items.iter().find(|i| i.line == line)
    }

    pub(crate) fn item_mut(&mut self, line: u32) -> Option<&mut WorkOrderItem> {
        self.items.iter_mut().find(|i| i.line == line)
    }

    /// Line number for the next item (lines are 1-based and never reused).
    pub(crate) fn next_line(&self) -> u32 {
        self.items.iter().map(|i| i.line).max().unwrap_or(0) + 1
    }
}

/// One ordered part: routing, quantity and revision data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderItem {
    pub line: u32,
    pub part_number: String,
    pub part_rev: String,
    pub description: String,
    pub quantity: u32,
    pub router: Option<Router>,
}

/// Reference to a work-order line from another document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineRef {
    pub work_order: WorkOrderId,
    pub line: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderItemCreate {
    pub part_number: String,
    pub part_rev: String,
    pub description: String,
    pub quantity: u32,
    pub router: Option<Router>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderCreate {
    pub order_number: String,
    pub customer: String,
    pub items: Vec<WorkOrderItemCreate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderUpdate {
    pub order_number: Option<String>,
}
