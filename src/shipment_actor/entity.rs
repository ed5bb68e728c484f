//! [`ActorEntity`] implementation for [`Shipment`].
//!
//! A current shipment owns its packing slips: creating it assigns every slip
//! (all or nothing), editing the slip list assigns and releases the
//! difference, and deleting it releases them. Past versions are inert
//! snapshots and never touch the slips.

use super::ShipmentError;
use crate::clients::PackingSlipClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{
    DeliveryDetails, DeliveryMethod, PackingSlipId, Shipment, ShipmentCreate, ShipmentId,
    ShipmentUpdate,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

fn check_delivery(delivery: &DeliveryDetails) -> Result<(), ShipmentError> {
    let has_carrier = delivery
        .carrier
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());
    if delivery.delivery_method == DeliveryMethod::Carrier && !has_carrier {
        return Err(ShipmentError::ValidationError(
            "carrier is required for carrier deliveries".into(),
        ));
    }
    Ok(())
}

/// Assigns `slips` to `shipment`, releasing the ones already assigned if any
/// assignment fails.
async fn assign_all(
    packing_slips: &PackingSlipClient,
    shipment: ShipmentId,
    customer: &str,
    slips: &[PackingSlipId],
) -> Result<(), ShipmentError> {
    for (done, &slip) in slips.iter().enumerate() {
        if let Err(e) = assign_one(packing_slips, shipment, customer, slip).await {
            release_all(packing_slips, shipment, &slips[..done]).await;
            return Err(e);
        }
    }
    Ok(())
}

async fn assign_one(
    packing_slips: &PackingSlipClient,
    shipment: ShipmentId,
    customer: &str,
    slip: PackingSlipId,
) -> Result<(), ShipmentError> {
    let found = packing_slips.require(slip).await?;
    if found.customer != customer {
        return Err(ShipmentError::ValidationError(format!(
            "{slip} belongs to {}, not {customer}",
            found.customer
        )));
    }
    packing_slips.assign_shipment(slip, shipment).await?;
    Ok(())
}

async fn release_all(packing_slips: &PackingSlipClient, shipment: ShipmentId, slips: &[PackingSlipId]) {
    for &slip in slips {
        if let Err(e) = packing_slips.unassign_shipment(slip, shipment).await {
            warn!(%shipment, %slip, error = %e, "Failed to release packing slip");
        }
    }
}

impl Shipment {
    fn ensure_current(&self) -> Result<(), ShipmentError> {
        if self.is_past_version {
            return Err(ShipmentError::PastVersion(self.id.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Shipment {
    type Id = ShipmentId;
    type Create = ShipmentCreate;
    type Update = ShipmentUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = PackingSlipClient;
    type Error = ShipmentError;

    fn from_create_params(id: ShipmentId, params: ShipmentCreate) -> Result<Self, ShipmentError> {
        let customer = params.customer.trim().to_uppercase();
        let label = params.label.trim().to_string();
        if customer.is_empty() || label.is_empty() {
            return Err(ShipmentError::ValidationError(
                "customer and label are required".into(),
            ));
        }
        check_delivery(&params.delivery)?;
        let DeliveryDetails {
            delivery_method,
            carrier,
            tracking_number,
            delivery_speed,
            customer_account,
        } = params.delivery;
        Ok(Self {
            id,
            customer,
            label,
            packing_slips: params.packing_slips,
            delivery_method,
            carrier,
            tracking_number,
            delivery_speed,
            customer_account,
            is_past_version: params.version_of.is_some(),
            created_at: params
                .created_at
                .filter(|_| params.version_of.is_some())
                .unwrap_or_else(Utc::now),
            version_of: params.version_of,
        })
    }

    /// Labels are unique per customer among current versions only.
    fn unique_key(&self) -> Option<String> {
        if self.is_past_version {
            return None;
        }
        Some(format!("{}/{}", self.customer, self.label.to_uppercase()))
    }

    async fn on_create(&mut self, packing_slips: &PackingSlipClient) -> Result<(), ShipmentError> {
        if self.is_past_version {
            return Ok(());
        }
        assign_all(packing_slips, self.id, &self.customer, &self.packing_slips).await
    }

    async fn on_update(
        &mut self,
        update: ShipmentUpdate,
        packing_slips: &PackingSlipClient,
    ) -> Result<(), ShipmentError> {
        self.ensure_current()?;
        if let Some(delivery) = update.delivery {
            check_delivery(&delivery)?;
            self.delivery_method = delivery.delivery_method;
            self.carrier = delivery.carrier;
            self.tracking_number = delivery.tracking_number;
            self.delivery_speed = delivery.delivery_speed;
            self.customer_account = delivery.customer_account;
        }
        if let Some(slips) = update.packing_slips {
            let added: Vec<_> = slips
                .iter()
                .copied()
                .filter(|s| !self.packing_slips.contains(s))
                .collect();
            let removed: Vec<_> = self
                .packing_slips
                .iter()
                .copied()
                .filter(|s| !slips.contains(s))
                .collect();
            assign_all(packing_slips, self.id, &self.customer, &added).await?;
            release_all(packing_slips, self.id, &removed).await;
            self.packing_slips = slips;
        }
        Ok(())
    }

    async fn on_delete(&self, packing_slips: &PackingSlipClient) -> Result<(), ShipmentError> {
        self.ensure_current()?;
        release_all(packing_slips, self.id, &self.packing_slips).await;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &PackingSlipClient) -> Result<(), ShipmentError> {
        Ok(())
    }
}
