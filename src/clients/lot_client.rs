use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient};
use crate::job_actor::InsertedStep;
use crate::lot_actor::{LotAction, LotActionResult, LotError};
use crate::model::{InsertStepRequest, JobId, Lot, LotCreate, LotId, LotUpdate, Router, RouterStep};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Lot actor.
#[derive(Clone)]
pub struct LotClient {
    inner: ResourceClient<Lot>,
}

macro_rules! expect_result {
    ($result:expr, $variant:ident) => {
        match $result {
            LotActionResult::$variant(value) => Ok(value),
            other => Err(LotError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    };
}

impl LotClient {
    pub fn new(inner: ResourceClient<Lot>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_lot(&self, lot: LotCreate) -> Result<LotId, LotError> {
        debug!("Sending request");
        self.inner.create(lot).await.map_err(LotError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_lot(&self, id: LotId, update: LotUpdate) -> Result<Lot, LotError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(LotError::from)
    }

    #[instrument(skip(self))]
    pub async fn lots_of_job(&self, job: JobId) -> Result<Vec<Lot>, LotError> {
        debug!("Sending request");
        Ok(self.list(Query::filter(move |l: &Lot| l.job == job)).await?.items)
    }

    /// Scraps the lot; returns the new revision letter.
    #[instrument(skip(self))]
    pub async fn scrap(&self, id: LotId) -> Result<String, LotError> {
        debug!("Sending request");
        expect_result!(self.act(id, LotAction::Scrap).await?, Scrap)
    }

    #[instrument(skip(self))]
    pub async fn insert_step(
        &self,
        id: LotId,
        request: InsertStepRequest,
    ) -> Result<InsertedStep, LotError> {
        debug!("Sending request");
        expect_result!(self.act(id, LotAction::InsertStep(request)).await?, InsertStep)
    }

    #[instrument(skip(self))]
    pub async fn remove_step(&self, id: LotId, index: usize) -> Result<RouterStep, LotError> {
        debug!("Sending request");
        expect_result!(self.act(id, LotAction::RemoveStep(index)).await?, RemoveStep)
    }

    /// Codes every uncoded step of the special router; returns how many.
    #[instrument(skip(self))]
    pub async fn freeze_router(&self, id: LotId) -> Result<usize, LotError> {
        debug!("Sending request");
        expect_result!(self.act(id, LotAction::FreezeRouter).await?, FreezeRouter)
    }

    #[instrument(skip(self, router))]
    pub async fn replace_router(&self, id: LotId, router: Router) -> Result<(), LotError> {
        debug!("Sending request");
        expect_result!(
            self.act(id, LotAction::ReplaceRouter(router)).await?,
            ReplaceRouter
        )
    }

    async fn act(&self, id: LotId, action: LotAction) -> Result<LotActionResult, LotError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(LotError::from)
    }
}

#[async_trait]
impl ActorClient<Lot> for LotClient {
    type Error = LotError;

    fn inner(&self) -> &ResourceClient<Lot> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
