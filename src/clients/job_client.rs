use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::job_actor::{InsertedStep, JobAction, JobActionResult, JobError};
use crate::model::{Job, JobCreate, JobId, JobUpdate, LotId, Router, RouterStep};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Job actor.
#[derive(Clone)]
pub struct JobClient {
    inner: ResourceClient<Job>,
}

macro_rules! expect_result {
    ($result:expr, $variant:ident) => {
        match $result {
            JobActionResult::$variant(value) => Ok(value),
            other => Err(JobError::ActorCommunicationError(format!(
                "unexpected action result: {other:?}"
            ))),
        }
    };
}

impl JobClient {
    pub fn new(inner: ResourceClient<Job>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_job(&self, job: JobCreate) -> Result<JobId, JobError> {
        debug!("Sending request");
        self.inner.create(job).await.map_err(JobError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_job(&self, id: JobId, update: JobUpdate) -> Result<Job, JobError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(JobError::from)
    }

    #[instrument(skip(self))]
    pub async fn hold(&self, id: JobId) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::Hold).await?, Hold)
    }

    #[instrument(skip(self))]
    pub async fn resume(&self, id: JobId) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::Resume).await?, Resume)
    }

    /// Releases the job and returns its lots, whose routers still need freezing.
    #[instrument(skip(self))]
    pub async fn release(&self, id: JobId) -> Result<Vec<LotId>, JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::Release).await?, Release)
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: JobId) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::Cancel).await?, Cancel)
    }

    #[instrument(skip(self))]
    pub async fn attach_lot(&self, id: JobId, lot: LotId) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::AttachLot(lot)).await?, AttachLot)
    }

    #[instrument(skip(self))]
    pub async fn detach_lot(&self, id: JobId, lot: LotId) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::DetachLot(lot)).await?, DetachLot)
    }

    #[instrument(skip(self, step), fields(step = %step.name))]
    pub async fn insert_step(
        &self,
        id: JobId,
        step: RouterStep,
        insert_after: Option<usize>,
    ) -> Result<InsertedStep, JobError> {
        debug!("Sending request");
        expect_result!(
            self.act(id, JobAction::InsertStep { step, insert_after }).await?,
            InsertStep
        )
    }

    #[instrument(skip(self))]
    pub async fn remove_step(&self, id: JobId, index: usize) -> Result<RouterStep, JobError> {
        debug!("Sending request");
        expect_result!(self.act(id, JobAction::RemoveStep(index)).await?, RemoveStep)
    }

    #[instrument(skip(self, router))]
    pub async fn replace_router(&self, id: JobId, router: Router) -> Result<(), JobError> {
        debug!("Sending request");
        expect_result!(
            self.act(id, JobAction::ReplaceRouter(router)).await?,
            ReplaceRouter
        )
    }

    async fn act(&self, id: JobId, action: JobAction) -> Result<JobActionResult, JobError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(JobError::from)
    }
}

#[async_trait]
impl ActorClient<Job> for JobClient {
    type Error = JobError;

    fn inner(&self) -> &ResourceClient<Job> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
