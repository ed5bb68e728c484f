//! Line-item operations on a [`WorkOrder`](crate::model::WorkOrder).

use crate::model::{Router, WorkOrderItemCreate};

/// Custom actions for WorkOrder entities.
#[derive(Debug, Clone)]
pub enum WorkOrderAction {
    /// Appends a line item; the line number is assigned by the order.
    AddItem(WorkOrderItemCreate),
    /// Replaces (or clears) the router of a line item.
    SetItemRouter { line: u32, router: Option<Router> },
    SetItemQuantity { line: u32, quantity: u32 },
}

/// Results from WorkOrderActions - variants match 1:1 with WorkOrderAction
#[derive(Debug, Clone)]
pub enum WorkOrderActionResult {
    /// The line number of the new item.
    AddItem(u32),
    SetItemRouter(()),
    SetItemQuantity(()),
}
