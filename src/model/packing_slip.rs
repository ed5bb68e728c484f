/// Goods prepared for one destination, drawn from work-order lines.
///
/// Labels are unique per customer. Once a slip is on a shipment its lines
/// are frozen until the shipment releases it.
use crate::model::{LineRef, PackingSlipId, ShipmentId, WorkOrderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Destination {
    #[default]
    Customer,
    Vendor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingSlip {
    pub id: PackingSlipId,
    pub customer: String,
    pub label: String,
    pub destination: Destination,
    pub items: Vec<PackingSlipItem>,
    pub shipment: Option<ShipmentId>,
    pub created_at: DateTime<Utc>,
}

impl PackingSlip {
    /// Quantity this slip packs for `line`.
    pub fn packed_quantity(&self, line: LineRef) -> u32 {
        self.items
            .iter()
            .filter(|i| i.line_ref() == line)
            .map(|i| i.quantity)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingSlipItem {
    pub work_order: WorkOrderId,
    pub line: u32,
    pub quantity: u32,
    pub destination_code: Option<u32>,
}

impl PackingSlipItem {
    pub fn line_ref(&self) -> LineRef {
        LineRef {
            work_order: self.work_order,
            line: self.line,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingSlipItemCreate {
    pub work_order: WorkOrderId,
    pub line: u32,
    pub quantity: u32,
}

/// Payload accepted by the packing-slip actor; the label is always set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingSlipCreate {
    pub customer: String,
    pub label: String,
    pub destination: Destination,
    pub items: Vec<PackingSlipItemCreate>,
}

/// Payload accepted by the packing-slip client; a missing label is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackingSlip {
    pub customer: String,
    pub label: Option<String>,
    pub destination: Destination,
    pub items: Vec<PackingSlipItemCreate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackingSlipUpdate {
    pub destination: Option<Destination>,
    pub items: Option<Vec<PackingSlipItemCreate>>,
}
