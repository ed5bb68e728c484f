//! Error types for the Job actor.

use crate::error::{
    HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND,
};
use crate::framework::FrameworkError;
use crate::sequencing::SequenceError;
use thiserror::Error;

/// Errors that can occur during job operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum JobError {
    #[error("Job not found: {0}")]
    NotFound(String),

    /// Job numbers are unique.
    #[error("Job already exists: {0}")]
    AlreadyExists(String),

    #[error("Job already released")]
    AlreadyReleased,

    #[error("Job is on hold")]
    OnHold,

    #[error("Job is not on hold")]
    NotOnHold,

    #[error("Job is cancelled")]
    Cancelled,

    #[error("Job still has {0} lot(s)")]
    HasLots(usize),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("Job validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for JobError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<JobError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => JobError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => JobError::AlreadyExists(key),
            Err(other) => JobError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for JobError {
    fn status_code(&self) -> u16 {
        match self {
            JobError::NotFound(_) => NOT_FOUND,
            JobError::AlreadyExists(_) => CONFLICT,
            JobError::AlreadyReleased
            | JobError::OnHold
            | JobError::NotOnHold
            | JobError::Cancelled
            | JobError::HasLots(_) => METHOD_NOT_ALLOWED,
            JobError::Sequence(e) => e.status_code(),
            JobError::ValidationError(_) => BAD_REQUEST,
            JobError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
