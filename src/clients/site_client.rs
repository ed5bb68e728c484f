use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient};
use crate::model::{Site, SiteCreate, SiteId, SiteUpdate};
use crate::site_actor::SiteError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Site actor.
#[derive(Clone)]
pub struct SiteClient {
    inner: ResourceClient<Site>,
}

impl SiteClient {
    pub fn new(inner: ResourceClient<Site>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_site(&self, site: SiteCreate) -> Result<SiteId, SiteError> {
        debug!("Sending request");
        self.inner.create(site).await.map_err(SiteError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_site(&self, id: SiteId, update: SiteUpdate) -> Result<Site, SiteError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(SiteError::from)
    }

    /// All sites, in creation order.
    pub async fn all(&self) -> Result<Vec<Site>, SiteError> {
        Ok(self.list(Query::all()).await?.items)
    }
}

#[async_trait]
impl ActorClient<Site> for SiteClient {
    type Error = SiteError;

    fn inner(&self) -> &ResourceClient<Site> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
