use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{RouteStep, RouteStepCreate, RouteStepId, RouteStepUpdate};
use crate::route_step_actor::RouteStepError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the route-step catalog.
#[derive(Clone)]
pub struct RouteStepClient {
    inner: ResourceClient<RouteStep>,
}

impl RouteStepClient {
    pub fn new(inner: ResourceClient<RouteStep>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_step(&self, step: RouteStepCreate) -> Result<RouteStepId, RouteStepError> {
        debug!("Sending request");
        self.inner.create(step).await.map_err(RouteStepError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_step(
        &self,
        id: RouteStepId,
        update: RouteStepUpdate,
    ) -> Result<RouteStep, RouteStepError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(RouteStepError::from)
    }
}

#[async_trait]
impl ActorClient<RouteStep> for RouteStepClient {
    type Error = RouteStepError;

    fn inner(&self) -> &ResourceClient<RouteStep> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
