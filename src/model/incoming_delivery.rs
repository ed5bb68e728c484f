use crate::model::{IncomingDeliveryId, LineRef, ShipmentId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Goods expected back at the shop, typically returning from a vendor
/// shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingDelivery {
    pub id: IncomingDeliveryId,
    pub label: String,
    pub source_shipment: Option<ShipmentId>,
    pub po_number: Option<String>,
    pub expected_date: Option<NaiveDate>,
    pub received_on: Option<DateTime<Utc>>,
    pub received: Vec<ReceivedLine>,
}

impl IncomingDelivery {
    pub fn is_received(&self) -> bool {
        self.received_on.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedLine {
    pub line: LineRef,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingDeliveryCreate {
    pub label: String,
    pub source_shipment: Option<ShipmentId>,
    pub po_number: Option<String>,
    pub expected_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomingDeliveryUpdate {
    pub po_number: Option<String>,
    pub expected_date: Option<NaiveDate>,
}
