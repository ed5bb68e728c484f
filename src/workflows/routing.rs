//! Router edits that need the route-step catalog.

use super::WorkflowError;
use crate::clients::{JobClient, LotClient, RouteStepClient, RouteTemplateClient};
use crate::framework::ActorClient;
use crate::job_actor::{InsertedStep, JobError};
use crate::model::{InsertStepRequest, JobId, LotId, RouteTemplateId, Router};
use tracing::{debug, instrument};

/// Resolves a template's steps through the catalog into a fresh, uncoded router.
#[instrument(skip(templates, catalog))]
pub async fn build_router(
    templates: &RouteTemplateClient,
    catalog: &RouteStepClient,
    template: RouteTemplateId,
) -> Result<Router, WorkflowError> {
    let template = templates.require(template).await?;
    let mut steps = Vec::with_capacity(template.steps.len());
    for step in template.steps {
        let catalog_step = catalog.require(step.step).await?;
        steps.push(catalog_step.to_router_step(step.description));
    }
    debug!(steps = steps.len(), "Router built from template");
    Ok(Router::new(steps))
}

/// Replaces a job's router with a template. Released jobs keep their router.
#[instrument(skip(templates, catalog, jobs))]
pub async fn import_template_into_job(
    templates: &RouteTemplateClient,
    catalog: &RouteStepClient,
    jobs: &JobClient,
    template: RouteTemplateId,
    job: JobId,
) -> Result<usize, WorkflowError> {
    if jobs.require(job).await?.is_released() {
        return Err(JobError::AlreadyReleased.into());
    }
    let router = build_router(templates, catalog, template).await?;
    let steps = router.len();
    jobs.replace_router(job, router).await?;
    Ok(steps)
}

/// Replaces a lot's special router with a template.
#[instrument(skip(templates, catalog, lots))]
pub async fn import_template_into_lot(
    templates: &RouteTemplateClient,
    catalog: &RouteStepClient,
    lots: &LotClient,
    template: RouteTemplateId,
    lot: LotId,
) -> Result<usize, WorkflowError> {
    lots.require(lot).await?;
    let router = build_router(templates, catalog, template).await?;
    let steps = router.len();
    lots.replace_router(lot, router).await?;
    Ok(steps)
}

/// Inserts a catalog step into a job's router.
#[instrument(skip(catalog, jobs))]
pub async fn insert_job_step(
    catalog: &RouteStepClient,
    jobs: &JobClient,
    job: JobId,
    request: InsertStepRequest,
) -> Result<InsertedStep, WorkflowError> {
    let step = request.step.ok_or(WorkflowError::MissingField("step"))?;
    let step = catalog.require(step).await?;
    let inserted = jobs
        .insert_step(job, step.to_router_step(request.description), request.insert_after)
        .await?;
    Ok(inserted)
}
