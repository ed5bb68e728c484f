//! Error types for the Lot actor.

use crate::error::{
    HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND,
};
use crate::framework::FrameworkError;
use crate::job_actor::JobError;
use crate::route_step_actor::RouteStepError;
use crate::sequencing::{RevisionError, SequenceError};
use thiserror::Error;

/// Errors that can occur during lot operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LotError {
    #[error("Lot not found: {0}")]
    NotFound(String),

    /// Lot numbers are unique within a job.
    #[error("Lot already exists: {0}")]
    AlreadyExists(String),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Route step not found: {0}")]
    StepNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Job already released")]
    JobReleased,

    #[error("Job is cancelled")]
    JobCancelled,

    #[error(transparent)]
    Revision(#[from] RevisionError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Lot validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LotError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<LotError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => LotError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => LotError::AlreadyExists(key),
            Err(other) => LotError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<JobError> for LotError {
    fn from(e: JobError) -> Self {
        match e {
            JobError::NotFound(id) => LotError::JobNotFound(id),
            JobError::AlreadyReleased => LotError::JobReleased,
            JobError::Cancelled => LotError::JobCancelled,
            other => LotError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RouteStepError> for LotError {
    fn from(e: RouteStepError) -> Self {
        match e {
            RouteStepError::NotFound(id) => LotError::StepNotFound(id),
            other => LotError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for LotError {
    fn status_code(&self) -> u16 {
        match self {
            LotError::NotFound(_) | LotError::JobNotFound(_) | LotError::StepNotFound(_) => {
                NOT_FOUND
            }
            LotError::AlreadyExists(_) => CONFLICT,
            LotError::MissingField(_) | LotError::ValidationError(_) => BAD_REQUEST,
            LotError::JobReleased | LotError::JobCancelled => METHOD_NOT_ALLOWED,
            LotError::Revision(e) => e.status_code(),
            LotError::Sequence(e) => e.status_code(),
            LotError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
