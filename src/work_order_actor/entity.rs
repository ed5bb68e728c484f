//! [`ActorEntity`] implementation for [`WorkOrder`].

use super::{WorkOrderAction, WorkOrderActionResult, WorkOrderError};
use crate::framework::ActorEntity;
use crate::model::{
    WorkOrder, WorkOrderCreate, WorkOrderId, WorkOrderItem, WorkOrderItemCreate, WorkOrderUpdate,
};
use async_trait::async_trait;
use chrono::Utc;

fn build_item(line: u32, params: WorkOrderItemCreate) -> Result<WorkOrderItem, WorkOrderError> {
    if params.part_number.trim().is_empty() {
        return Err(WorkOrderError::ValidationError(format!(
            "line {line}: part number is required"
        )));
    }
    if params.quantity == 0 {
        return Err(WorkOrderError::ValidationError(format!(
            "line {line}: quantity must be positive"
        )));
    }
    Ok(WorkOrderItem {
        line,
        part_number: params.part_number.trim().to_string(),
        part_rev: params.part_rev.trim().to_string(),
        description: params.description,
        quantity: params.quantity,
        router: params.router,
    })
}

impl WorkOrder {
    fn line_mut(&mut self, line: u32) -> Result<&mut WorkOrderItem, WorkOrderError> {
        let work_order = self.id.to_string();
        self.item_mut(line)
            .ok_or(WorkOrderError::ItemNotFound { work_order, line })
    }
}

#[async_trait]
impl ActorEntity for WorkOrder {
    type Id = WorkOrderId;
    type Create = WorkOrderCreate;
    type Update = WorkOrderUpdate;
    type Action = WorkOrderAction;
    type ActionResult = WorkOrderActionResult;
    type Context = ();
    type Error = WorkOrderError;

    fn from_create_params(id: WorkOrderId, params: WorkOrderCreate) -> Result<Self, WorkOrderError> {
        let order_number = params.order_number.trim().to_string();
        let customer = params.customer.trim().to_uppercase();
        if order_number.is_empty() || customer.is_empty() {
            return Err(WorkOrderError::ValidationError(
                "order number and customer are required".into(),
            ));
        }
        let items = params
            .items
            .into_iter()
            .zip(1..)
            .map(|(item, line)| build_item(line, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            id,
            order_number,
            customer,
            items,
            created_at: Utc::now(),
        })
    }

    /// Order numbers are unique per customer.
    fn unique_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.customer, self.order_number))
    }

    async fn on_update(&mut self, update: WorkOrderUpdate, _ctx: &()) -> Result<(), WorkOrderError> {
        if let Some(order_number) = update.order_number {
            if order_number.trim().is_empty() {
                return Err(WorkOrderError::ValidationError(
                    "order number is required".into(),
                ));
            }
            self.order_number = order_number.trim().to_string();
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), WorkOrderError> {
        Err(WorkOrderError::DeleteForbidden)
    }

    async fn handle_action(
        &mut self,
        action: WorkOrderAction,
        _ctx: &(),
    ) -> Result<WorkOrderActionResult, WorkOrderError> {
        match action {
            WorkOrderAction::AddItem(params) => {
                let line = self.next_line();
                self.items.push(build_item(line, params)?);
                Ok(WorkOrderActionResult::AddItem(line))
            }
            WorkOrderAction::SetItemRouter { line, router } => {
                self.line_mut(line)?.router = router;
                Ok(WorkOrderActionResult::SetItemRouter(()))
            }
            WorkOrderAction::SetItemQuantity { line, quantity } => {
                if quantity == 0 {
                    return Err(WorkOrderError::ValidationError(
                        "quantity must be positive".into(),
                    ));
                }
                self.line_mut(line)?.quantity = quantity;
                Ok(WorkOrderActionResult::SetItemQuantity(()))
            }
        }
    }
}
