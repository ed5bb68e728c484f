use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{
    Router, WorkOrder, WorkOrderCreate, WorkOrderId, WorkOrderItemCreate, WorkOrderUpdate,
};
use crate::work_order_actor::{WorkOrderAction, WorkOrderActionResult, WorkOrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the WorkOrder actor.
#[derive(Clone)]
pub struct WorkOrderClient {
    inner: ResourceClient<WorkOrder>,
}

impl WorkOrderClient {
    pub fn new(inner: ResourceClient<WorkOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub async fn create_work_order(
        &self,
        order: WorkOrderCreate,
    ) -> Result<WorkOrderId, WorkOrderError> {
        debug!("Sending request");
        self.inner.create(order).await.map_err(WorkOrderError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_work_order(
        &self,
        id: WorkOrderId,
        update: WorkOrderUpdate,
    ) -> Result<WorkOrder, WorkOrderError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(WorkOrderError::from)
    }

    /// Appends a line item and returns its line number.
    #[instrument(skip(self, item))]
    pub async fn add_item(
        &self,
        id: WorkOrderId,
        item: WorkOrderItemCreate,
    ) -> Result<u32, WorkOrderError> {
        debug!("Sending request");
        match self.act(id, WorkOrderAction::AddItem(item)).await? {
            WorkOrderActionResult::AddItem(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self, router))]
    pub async fn set_item_router(
        &self,
        id: WorkOrderId,
        line: u32,
        router: Option<Router>,
    ) -> Result<(), WorkOrderError> {
        debug!("Sending request");
        match self.act(id, WorkOrderAction::SetItemRouter { line, router }).await? {
            WorkOrderActionResult::SetItemRouter(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_item_quantity(
        &self,
        id: WorkOrderId,
        line: u32,
        quantity: u32,
    ) -> Result<(), WorkOrderError> {
        debug!("Sending request");
        match self
            .act(id, WorkOrderAction::SetItemQuantity { line, quantity })
            .await?
        {
            WorkOrderActionResult::SetItemQuantity(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn act(
        &self,
        id: WorkOrderId,
        action: WorkOrderAction,
    ) -> Result<WorkOrderActionResult, WorkOrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(WorkOrderError::from)
    }
}

fn unexpected(result: WorkOrderActionResult) -> WorkOrderError {
    WorkOrderError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<WorkOrder> for WorkOrderClient {
    type Error = WorkOrderError;

    fn inner(&self) -> &ResourceClient<WorkOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
