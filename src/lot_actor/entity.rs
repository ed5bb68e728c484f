//! [`ActorEntity`] implementation for [`Lot`].
//!
//! A lot follows its job's router until it is given a special router. The
//! special router is seeded from the job router on the first edit; after
//! that the two evolve independently. Whether inserted steps get a code
//! depends on the owning job's release state, read through the injected
//! [`JobClient`] at the time of the edit.

use super::{LotAction, LotActionResult, LotContext, LotError};
use crate::clients::{JobClient, RouteStepClient};
use crate::framework::{ActorClient, ActorEntity};
use crate::job_actor::InsertedStep;
use crate::model::{InsertStepRequest, Job, JobStatus, Lot, LotCreate, LotId, LotUpdate, Router};
use crate::sequencing::{freeze, insert_step, next_revision, remove_step};
use async_trait::async_trait;

impl Lot {
    /// The special router, seeded from `job` if the lot has none yet.
    fn router_mut(&mut self, job: &Job) -> &mut Router {
        self.special_router.get_or_insert_with(|| job.router.clone())
    }

    async fn unreleased_job(&self, jobs: &JobClient) -> Result<Job, LotError> {
        let job = jobs.require(self.job).await?;
        if job.is_released() {
            return Err(LotError::JobReleased);
        }
        Ok(job)
    }

    async fn insert(
        &mut self,
        request: InsertStepRequest,
        jobs: &JobClient,
        catalog: &RouteStepClient,
        increment: u32,
    ) -> Result<InsertedStep, LotError> {
        let step_id = request.step.ok_or(LotError::MissingField("step"))?;
        let step = catalog.require(step_id).await?;
        let job = jobs.require(self.job).await?;
        let router = self.router_mut(&job);
        let index = insert_step(
            router,
            request.insert_after,
            step.to_router_step(request.description),
            job.is_released(),
            increment,
        )?;
        Ok(InsertedStep {
            index,
            step_code: router.steps[index].step_code,
        })
    }
}

#[async_trait]
impl ActorEntity for Lot {
    type Id = LotId;
    type Create = LotCreate;
    type Update = LotUpdate;
    type Action = LotAction;
    type ActionResult = LotActionResult;
    type Context = LotContext;
    type Error = LotError;

    fn from_create_params(id: LotId, params: LotCreate) -> Result<Self, LotError> {
        let number = params.number.trim().to_string();
        if number.is_empty() {
            return Err(LotError::MissingField("number"));
        }
        if params.quantity == 0 {
            return Err(LotError::ValidationError("quantity must be positive".into()));
        }
        Ok(Self {
            id,
            job: params.job,
            number,
            quantity: params.quantity,
            rev: None,
            special_router: None,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.job, self.number.to_uppercase()))
    }

    /// Attaches the lot to its job, which must exist and not be cancelled.
    async fn on_create(&mut self, ctx: &LotContext) -> Result<(), LotError> {
        let job = ctx.jobs.require(self.job).await?;
        if job.status == JobStatus::Cancelled {
            return Err(LotError::JobCancelled);
        }
        ctx.jobs.attach_lot(self.job, self.id).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: LotUpdate, ctx: &LotContext) -> Result<(), LotError> {
        self.unreleased_job(&ctx.jobs).await?;
        if let Some(quantity) = update.quantity {
            if quantity == 0 {
                return Err(LotError::ValidationError("quantity must be positive".into()));
            }
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn on_delete(&self, ctx: &LotContext) -> Result<(), LotError> {
        self.unreleased_job(&ctx.jobs).await?;
        ctx.jobs.detach_lot(self.job, self.id).await?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: LotAction,
        ctx: &LotContext,
    ) -> Result<LotActionResult, LotError> {
        let increment = ctx.settings.step_code_increment;
        match action {
            LotAction::Scrap => {
                self.unreleased_job(&ctx.jobs).await?;
                let rev = next_revision(self.rev.as_deref())?;
                self.rev = Some(rev.clone());
                Ok(LotActionResult::Scrap(rev))
            }
            LotAction::InsertStep(request) => {
                let inserted = self.insert(request, &ctx.jobs, &ctx.steps, increment).await?;
                Ok(LotActionResult::InsertStep(inserted))
            }
            LotAction::RemoveStep(index) => {
                let job = self.unreleased_job(&ctx.jobs).await?;
                let removed = remove_step(self.router_mut(&job), index)?;
                Ok(LotActionResult::RemoveStep(removed))
            }
            LotAction::FreezeRouter => {
                let frozen = match self.special_router.as_mut() {
                    Some(router) => freeze(router, increment)?,
                    None => 0,
                };
                Ok(LotActionResult::FreezeRouter(frozen))
            }
            LotAction::ReplaceRouter(router) => {
                self.unreleased_job(&ctx.jobs).await?;
                self.special_router = Some(router);
                Ok(LotActionResult::ReplaceRouter(()))
            }
        }
    }
}
