use crate::error::{HttpStatus, BAD_REQUEST};
use crate::job_actor::JobError;
use crate::lot_actor::LotError;
use crate::packing_slip_actor::PackingSlipError;
use crate::route_step_actor::RouteStepError;
use crate::route_template_actor::RouteTemplateError;
use crate::work_order_actor::WorkOrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Job(#[from] JobError),

    #[error(transparent)]
    Lot(#[from] LotError),

    #[error(transparent)]
    RouteStep(#[from] RouteStepError),

    #[error(transparent)]
    RouteTemplate(#[from] RouteTemplateError),

    #[error(transparent)]
    WorkOrder(#[from] WorkOrderError),

    #[error(transparent)]
    PackingSlip(#[from] PackingSlipError),
}

impl HttpStatus for WorkflowError {
    fn status_code(&self) -> u16 {
        match self {
            WorkflowError::MissingField(_) => BAD_REQUEST,
            WorkflowError::Job(e) => e.status_code(),
            WorkflowError::Lot(e) => e.status_code(),
            WorkflowError::RouteStep(e) => e.status_code(),
            WorkflowError::RouteTemplate(e) => e.status_code(),
            WorkflowError::WorkOrder(e) => e.status_code(),
            WorkflowError::PackingSlip(e) => e.status_code(),
        }
    }
}
