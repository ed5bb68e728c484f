/// A manifest of packing slips sent together.
///
/// Edits never rewrite history: before the current document changes, a copy
/// of it is stored with `is_past_version` set and `version_of` pointing back.
use crate::model::{PackingSlipId, ShipmentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryMethod {
    Pickup,
    Dropoff,
    #[default]
    Carrier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub customer: String,
    pub label: String,
    pub packing_slips: Vec<PackingSlipId>,
    pub delivery_method: DeliveryMethod,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub delivery_speed: Option<String>,
    pub customer_account: Option<String>,
    pub is_past_version: bool,
    pub version_of: Option<ShipmentId>,
    pub created_at: DateTime<Utc>,
}

/// Carrier and delivery metadata shared by create and update payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub delivery_method: DeliveryMethod,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub delivery_speed: Option<String>,
    pub customer_account: Option<String>,
}

/// Payload accepted by the shipment actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentCreate {
    pub customer: String,
    pub label: String,
    pub packing_slips: Vec<PackingSlipId>,
    pub delivery: DeliveryDetails,
    /// Set only when archiving a prior version of `version_of`.
    pub version_of: Option<ShipmentId>,
    /// Creation time of the archived version; ignored for current shipments.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ShipmentCreate {
    /// Archive copy of `shipment` as it is right now.
    pub fn past_version_of(shipment: &Shipment) -> Self {
        Self {
            customer: shipment.customer.clone(),
            label: shipment.label.clone(),
            packing_slips: shipment.packing_slips.clone(),
            delivery: DeliveryDetails {
                delivery_method: shipment.delivery_method,
                carrier: shipment.carrier.clone(),
                tracking_number: shipment.tracking_number.clone(),
                delivery_speed: shipment.delivery_speed.clone(),
                customer_account: shipment.customer_account.clone(),
            },
            version_of: Some(shipment.id),
            created_at: Some(shipment.created_at),
        }
    }
}

/// Payload accepted by the shipment client; a missing label is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShipment {
    pub customer: String,
    pub label: Option<String>,
    pub packing_slips: Vec<PackingSlipId>,
    pub delivery: DeliveryDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentUpdate {
    pub packing_slips: Option<Vec<PackingSlipId>>,
    pub delivery: Option<DeliveryDetails>,
}
