//! Error types for the RouteTemplate actor.

use crate::error::{HttpStatus, BAD_REQUEST, INTERNAL_ERROR, NOT_FOUND};
use crate::framework::FrameworkError;
use crate::route_step_actor::RouteStepError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RouteTemplateError {
    #[error("Route template not found: {0}")]
    NotFound(String),

    #[error("Route step not found: {0}")]
    StepNotFound(String),

    #[error("Route template validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RouteTemplateError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<RouteTemplateError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => RouteTemplateError::NotFound(id),
            Err(other) => RouteTemplateError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RouteStepError> for RouteTemplateError {
    fn from(e: RouteStepError) -> Self {
        match e {
            RouteStepError::NotFound(id) => RouteTemplateError::StepNotFound(id),
            other => RouteTemplateError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for RouteTemplateError {
    fn status_code(&self) -> u16 {
        match self {
            RouteTemplateError::NotFound(_) | RouteTemplateError::StepNotFound(_) => NOT_FOUND,
            RouteTemplateError::ValidationError(_) => BAD_REQUEST,
            RouteTemplateError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
