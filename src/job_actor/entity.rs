//! [`ActorEntity`] implementation for [`Job`].
//!
//! Status transitions:
//!
//! | From \ Action | Hold    | Resume  | Release  | Cancel    |
//! |---------------|---------|---------|----------|-----------|
//! | Active        | OnHold  | 405     | released | Cancelled |
//! | OnHold        | OnHold  | Active  | 405      | Cancelled |
//! | Cancelled     | 405     | 405     | 405      | 405       |
//!
//! Release is one-way. A released job's fields and router layout are fixed;
//! steps can still be inserted, and receive permanent codes.
//!
//! A job with lots cannot be deleted.

use super::{InsertedStep, JobAction, JobActionResult, JobError, RouterSettings};
use crate::framework::ActorEntity;
use crate::model::{Job, JobCreate, JobId, JobStatus, JobUpdate, LotId, Router};
use crate::sequencing::{freeze, insert_step, remove_step};
use async_trait::async_trait;
use chrono::Utc;

impl Job {
    fn ensure_not_cancelled(&self) -> Result<(), JobError> {
        if self.status == JobStatus::Cancelled {
            return Err(JobError::Cancelled);
        }
        Ok(())
    }

    fn ensure_unreleased(&self) -> Result<(), JobError> {
        if self.is_released() {
            return Err(JobError::AlreadyReleased);
        }
        Ok(())
    }

    fn release(&mut self, settings: &RouterSettings) -> Result<Vec<LotId>, JobError> {
        self.ensure_not_cancelled()?;
        if self.status == JobStatus::OnHold {
            return Err(JobError::OnHold);
        }
        self.ensure_unreleased()?;
        freeze(&mut self.router, settings.step_code_increment)?;
        self.released_on = Some(Utc::now());
        Ok(self.lots.clone())
    }
}

#[async_trait]
impl ActorEntity for Job {
    type Id = JobId;
    type Create = JobCreate;
    type Update = JobUpdate;
    type Action = JobAction;
    type ActionResult = JobActionResult;
    type Context = RouterSettings;
    type Error = JobError;

    fn from_create_params(id: JobId, params: JobCreate) -> Result<Self, JobError> {
        let job_number = params.job_number.trim().to_string();
        if job_number.is_empty() || params.part_number.trim().is_empty() {
            return Err(JobError::ValidationError(
                "job number and part number are required".into(),
            ));
        }
        if params.quantity == 0 {
            return Err(JobError::ValidationError("quantity must be positive".into()));
        }
        Ok(Self {
            id,
            job_number,
            part_number: params.part_number.trim().to_string(),
            part_rev: params.part_rev.trim().to_string(),
            quantity: params.quantity,
            due_date: params.due_date,
            status: JobStatus::Active,
            released_on: None,
            router: Router::default(),
            lots: Vec::new(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.job_number.to_uppercase())
    }

    async fn on_update(&mut self, update: JobUpdate, _ctx: &RouterSettings) -> Result<(), JobError> {
        self.ensure_unreleased()?;
        if let Some(part_rev) = update.part_rev {
            self.part_rev = part_rev.trim().to_string();
        }
        if let Some(quantity) = update.quantity {
            if quantity == 0 {
                return Err(JobError::ValidationError("quantity must be positive".into()));
            }
            self.quantity = quantity;
        }
        if update.due_date.is_some() {
            self.due_date = update.due_date;
        }
        Ok(())
    }

    /// Lots must be deleted first; they cannot outlive their job.
    async fn on_delete(&self, _ctx: &RouterSettings) -> Result<(), JobError> {
        self.ensure_unreleased()?;
        if !self.lots.is_empty() {
            return Err(JobError::HasLots(self.lots.len()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: JobAction,
        settings: &RouterSettings,
    ) -> Result<JobActionResult, JobError> {
        match action {
            JobAction::Hold => {
                self.ensure_not_cancelled()?;
                self.status = JobStatus::OnHold;
                Ok(JobActionResult::Hold(()))
            }
            JobAction::Resume => {
                self.ensure_not_cancelled()?;
                if self.status != JobStatus::OnHold {
                    return Err(JobError::NotOnHold);
                }
                self.status = JobStatus::Active;
                Ok(JobActionResult::Resume(()))
            }
            JobAction::Release => self.release(settings).map(JobActionResult::Release),
            JobAction::Cancel => {
                self.ensure_not_cancelled()?;
                self.status = JobStatus::Cancelled;
                Ok(JobActionResult::Cancel(()))
            }
            JobAction::AttachLot(lot) => {
                self.ensure_not_cancelled()?;
                if !self.lots.contains(&lot) {
                    self.lots.push(lot);
                }
                Ok(JobActionResult::AttachLot(()))
            }
            JobAction::DetachLot(lot) => {
                self.lots.retain(|l| *l != lot);
                Ok(JobActionResult::DetachLot(()))
            }
            JobAction::InsertStep { step, insert_after } => {
                let released = self.is_released();
                let index = insert_step(
                    &mut self.router,
                    insert_after,
                    step,
                    released,
                    settings.step_code_increment,
                )?;
                Ok(JobActionResult::InsertStep(InsertedStep {
                    index,
                    step_code: self.router.steps[index].step_code,
                }))
            }
            JobAction::RemoveStep(index) => {
                self.ensure_unreleased()?;
                let removed = remove_step(&mut self.router, index)?;
                Ok(JobActionResult::RemoveStep(removed))
            }
            JobAction::ReplaceRouter(router) => {
                self.ensure_unreleased()?;
                self.router = router;
                Ok(JobActionResult::ReplaceRouter(()))
            }
        }
    }
}
