//! Error types for the RouteStep catalog actor.

use crate::error::{HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, NOT_FOUND};
use crate::framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteStepError {
    #[error("Route step not found: {0}")]
    NotFound(String),

    #[error("Route step already exists: {0}")]
    AlreadyExists(String),

    #[error("Route step validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RouteStepError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<RouteStepError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => RouteStepError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => RouteStepError::AlreadyExists(key),
            Err(other) => RouteStepError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for RouteStepError {
    fn status_code(&self) -> u16 {
        match self {
            RouteStepError::NotFound(_) => NOT_FOUND,
            RouteStepError::AlreadyExists(_) => CONFLICT,
            RouteStepError::ValidationError(_) => BAD_REQUEST,
            RouteStepError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
