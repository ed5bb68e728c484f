use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::incoming_delivery_actor::{
    IncomingDeliveryAction, IncomingDeliveryActionResult, IncomingDeliveryError,
};
use crate::model::{
    IncomingDelivery, IncomingDeliveryCreate, IncomingDeliveryId, IncomingDeliveryUpdate,
    ReceivedLine,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the IncomingDelivery actor.
#[derive(Clone)]
pub struct IncomingDeliveryClient {
    inner: ResourceClient<IncomingDelivery>,
}

impl IncomingDeliveryClient {
    pub fn new(inner: ResourceClient<IncomingDelivery>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_delivery(
        &self,
        delivery: IncomingDeliveryCreate,
    ) -> Result<IncomingDeliveryId, IncomingDeliveryError> {
        debug!("Sending request");
        self.inner
            .create(delivery)
            .await
            .map_err(IncomingDeliveryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_delivery(
        &self,
        id: IncomingDeliveryId,
        update: IncomingDeliveryUpdate,
    ) -> Result<IncomingDelivery, IncomingDeliveryError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(IncomingDeliveryError::from)
    }

    #[instrument(skip(self, lines))]
    pub async fn receive(
        &self,
        id: IncomingDeliveryId,
        lines: Vec<ReceivedLine>,
    ) -> Result<(), IncomingDeliveryError> {
        debug!("Sending request");
        match self.act(id, IncomingDeliveryAction::Receive(lines)).await? {
            IncomingDeliveryActionResult::Receive(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn undo_receive(&self, id: IncomingDeliveryId) -> Result<(), IncomingDeliveryError> {
        debug!("Sending request");
        match self.act(id, IncomingDeliveryAction::UndoReceive).await? {
            IncomingDeliveryActionResult::UndoReceive(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn act(
        &self,
        id: IncomingDeliveryId,
        action: IncomingDeliveryAction,
    ) -> Result<IncomingDeliveryActionResult, IncomingDeliveryError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(IncomingDeliveryError::from)
    }
}

fn unexpected(result: IncomingDeliveryActionResult) -> IncomingDeliveryError {
    IncomingDeliveryError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<IncomingDelivery> for IncomingDeliveryClient {
    type Error = IncomingDeliveryError;

    fn inner(&self) -> &ResourceClient<IncomingDelivery> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
