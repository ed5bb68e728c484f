//! Shipment assignment and destination coding for packing slips.

use crate::model::ShipmentId;

#[derive(Debug, Clone)]
pub enum PackingSlipAction {
    /// Marks the slip as travelling on a shipment.
    AssignShipment(ShipmentId),
    /// Releases the slip from the shipment; a no-op if it is on another one.
    UnassignShipment(ShipmentId),
    /// Sets the destination code of the item at `index`.
    SetDestinationCode { index: usize, code: u32 },
}

/// Results from PackingSlipActions - variants match 1:1 with PackingSlipAction
#[derive(Debug, Clone)]
pub enum PackingSlipActionResult {
    AssignShipment(()),
    /// Whether the slip was actually released.
    UnassignShipment(bool),
    SetDestinationCode(()),
}
