use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{RouteTemplate, RouteTemplateCreate, RouteTemplateId, RouteTemplateUpdate};
use crate::route_template_actor::RouteTemplateError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the RouteTemplate actor.
#[derive(Clone)]
pub struct RouteTemplateClient {
    inner: ResourceClient<RouteTemplate>,
}

impl RouteTemplateClient {
    pub fn new(inner: ResourceClient<RouteTemplate>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_template(
        &self,
        template: RouteTemplateCreate,
    ) -> Result<RouteTemplateId, RouteTemplateError> {
        debug!("Sending request");
        self.inner.create(template).await.map_err(RouteTemplateError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_template(
        &self,
        id: RouteTemplateId,
        update: RouteTemplateUpdate,
    ) -> Result<RouteTemplate, RouteTemplateError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(RouteTemplateError::from)
    }
}

#[async_trait]
impl ActorClient<RouteTemplate> for RouteTemplateClient {
    type Error = RouteTemplateError;

    fn inner(&self) -> &ResourceClient<RouteTemplate> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
