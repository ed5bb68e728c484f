//! [`ActorEntity`] implementation for [`PackingSlip`].
//!
//! Slip items must point at existing lines of work orders belonging to the
//! slip's customer; the lines are checked through the injected
//! [`WorkOrderClient`]. Once a slip is on a shipment it is frozen.

use super::{PackingSlipAction, PackingSlipActionResult, PackingSlipError};
use crate::clients::WorkOrderClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{
    PackingSlip, PackingSlipCreate, PackingSlipId, PackingSlipItem, PackingSlipItemCreate,
    PackingSlipUpdate,
};
use async_trait::async_trait;
use chrono::Utc;

async fn resolve_items(
    work_orders: &WorkOrderClient,
    customer: &str,
    items: Vec<PackingSlipItemCreate>,
) -> Result<Vec<PackingSlipItem>, PackingSlipError> {
    let mut resolved = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            return Err(PackingSlipError::ValidationError(format!(
                "{} line {}: quantity must be positive",
                item.work_order, item.line
            )));
        }
        let order = work_orders.require(item.work_order).await?;
        if order.customer != customer {
            return Err(PackingSlipError::ValidationError(format!(
                "{} belongs to {}, not {}",
                order.id, order.customer, customer
            )));
        }
        if order.item(item.line).is_none() {
            return Err(PackingSlipError::LineNotFound {
                work_order: order.id.to_string(),
                line: item.line,
            });
        }
        resolved.push(PackingSlipItem {
            work_order: item.work_order,
            line: item.line,
            quantity: item.quantity,
            destination_code: None,
        });
    }
    Ok(resolved)
}

impl PackingSlip {
    fn ensure_unshipped(&self) -> Result<(), PackingSlipError> {
        match self.shipment {
            Some(shipment) => Err(PackingSlipError::AssignedToShipment(shipment.to_string())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActorEntity for PackingSlip {
    type Id = PackingSlipId;
    type Create = PackingSlipCreate;
    type Update = PackingSlipUpdate;
    type Action = PackingSlipAction;
    type ActionResult = PackingSlipActionResult;
    type Context = WorkOrderClient;
    type Error = PackingSlipError;

    /// Items are staged unresolved; `on_create` checks them against the work orders.
    fn from_create_params(
        id: PackingSlipId,
        params: PackingSlipCreate,
    ) -> Result<Self, PackingSlipError> {
        let customer = params.customer.trim().to_uppercase();
        let label = params.label.trim().to_string();
        if customer.is_empty() || label.is_empty() {
            return Err(PackingSlipError::ValidationError(
                "customer and label are required".into(),
            ));
        }
        if params.items.is_empty() {
            return Err(PackingSlipError::ValidationError(
                "a packing slip needs at least one item".into(),
            ));
        }
        let items = params
            .items
            .into_iter()
            .map(|i| PackingSlipItem {
                work_order: i.work_order,
                line: i.line,
                quantity: i.quantity,
                destination_code: None,
            })
            .collect();
        Ok(Self {
            id,
            customer,
            label,
            destination: params.destination,
            items,
            shipment: None,
            created_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.customer, self.label.to_uppercase()))
    }

    async fn on_create(&mut self, work_orders: &WorkOrderClient) -> Result<(), PackingSlipError> {
        let staged = self
            .items
            .drain(..)
            .map(|i| PackingSlipItemCreate {
                work_order: i.work_order,
                line: i.line,
                quantity: i.quantity,
            })
            .collect();
        self.items = resolve_items(work_orders, &self.customer, staged).await?;
        Ok(())
    }

    /// Replacing the items drops their destination codes.
    async fn on_update(
        &mut self,
        update: PackingSlipUpdate,
        work_orders: &WorkOrderClient,
    ) -> Result<(), PackingSlipError> {
        self.ensure_unshipped()?;
        if let Some(destination) = update.destination {
            if destination != self.destination {
                self.destination = destination;
                for item in &mut self.items {
                    item.destination_code = None;
                }
            }
        }
        if let Some(items) = update.items {
            if items.is_empty() {
                return Err(PackingSlipError::ValidationError(
                    "a packing slip needs at least one item".into(),
                ));
            }
            self.items = resolve_items(work_orders, &self.customer, items).await?;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &WorkOrderClient) -> Result<(), PackingSlipError> {
        self.ensure_unshipped()
    }

    async fn handle_action(
        &mut self,
        action: PackingSlipAction,
        _ctx: &WorkOrderClient,
    ) -> Result<PackingSlipActionResult, PackingSlipError> {
        match action {
            PackingSlipAction::AssignShipment(shipment) => match self.shipment {
                Some(current) if current != shipment => {
                    Err(PackingSlipError::AlreadyShipped(current.to_string()))
                }
                _ => {
                    self.shipment = Some(shipment);
                    Ok(PackingSlipActionResult::AssignShipment(()))
                }
            },
            PackingSlipAction::UnassignShipment(shipment) => {
                let released = self.shipment == Some(shipment);
                if released {
                    self.shipment = None;
                }
                Ok(PackingSlipActionResult::UnassignShipment(released))
            }
            PackingSlipAction::SetDestinationCode { index, code } => {
                let len = self.items.len();
                let item = self.items.get_mut(index).ok_or_else(|| {
                    PackingSlipError::ValidationError(format!(
                        "item {index} is out of range for a slip with {len} items"
                    ))
                })?;
                item.destination_code = Some(code);
                Ok(PackingSlipActionResult::SetDestinationCode(()))
            }
        }
    }
}
