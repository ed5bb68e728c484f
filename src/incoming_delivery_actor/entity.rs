//! [`ActorEntity`] implementation for [`IncomingDelivery`].

use super::{IncomingDeliveryAction, IncomingDeliveryActionResult, IncomingDeliveryError};
use crate::clients::ShipmentClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{
    IncomingDelivery, IncomingDeliveryCreate, IncomingDeliveryId, IncomingDeliveryUpdate,
};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for IncomingDelivery {
    type Id = IncomingDeliveryId;
    type Create = IncomingDeliveryCreate;
    type Update = IncomingDeliveryUpdate;
    type Action = IncomingDeliveryAction;
    type ActionResult = IncomingDeliveryActionResult;
    type Context = ShipmentClient;
    type Error = IncomingDeliveryError;

    fn from_create_params(
        id: IncomingDeliveryId,
        params: IncomingDeliveryCreate,
    ) -> Result<Self, IncomingDeliveryError> {
        let label = params.label.trim().to_string();
        if label.is_empty() {
            return Err(IncomingDeliveryError::ValidationError(
                "label is required".into(),
            ));
        }
        Ok(Self {
            id,
            label,
            source_shipment: params.source_shipment,
            po_number: params.po_number,
            expected_date: params.expected_date,
            received_on: None,
            received: Vec::new(),
        })
    }

    /// The source shipment, when given, must be a current version.
    async fn on_create(&mut self, shipments: &ShipmentClient) -> Result<(), IncomingDeliveryError> {
        if let Some(source) = self.source_shipment {
            let shipment = shipments.require(source).await?;
            if shipment.is_past_version {
                return Err(IncomingDeliveryError::ValidationError(format!(
                    "{source} is a past shipment version"
                )));
            }
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: IncomingDeliveryUpdate,
        _ctx: &ShipmentClient,
    ) -> Result<(), IncomingDeliveryError> {
        if update.po_number.is_some() {
            self.po_number = update.po_number;
        }
        if update.expected_date.is_some() {
            self.expected_date = update.expected_date;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: IncomingDeliveryAction,
        _ctx: &ShipmentClient,
    ) -> Result<IncomingDeliveryActionResult, IncomingDeliveryError> {
        match action {
            IncomingDeliveryAction::Receive(lines) => {
                if self.is_received() {
                    return Err(IncomingDeliveryError::AlreadyReceived);
                }
                if let Some(empty) = lines.iter().find(|l| l.quantity == 0) {
                    return Err(IncomingDeliveryError::ValidationError(format!(
                        "{} line {}: received quantity must be positive",
                        empty.line.work_order, empty.line.line
                    )));
                }
                self.received = lines;
                self.received_on = Some(Utc::now());
                Ok(IncomingDeliveryActionResult::Receive(()))
            }
            IncomingDeliveryAction::UndoReceive => {
                if !self.is_received() {
                    return Err(IncomingDeliveryError::NotReceived);
                }
                self.received.clear();
                self.received_on = None;
                Ok(IncomingDeliveryActionResult::UndoReceive(()))
            }
        }
    }
}
