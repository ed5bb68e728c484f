//! Error types for the Site actor.

use crate::error::{HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, NOT_FOUND};
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during site operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SiteError {
    /// The requested site was not found.
    #[error("Site not found: {0}")]
    NotFound(String),

    /// Another site already uses this name.
    #[error("Site already exists: {0}")]
    AlreadyExists(String),

    /// The site data provided is invalid.
    #[error("Site validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SiteError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<SiteError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => SiteError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => SiteError::AlreadyExists(key),
            Err(other) => SiteError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for SiteError {
    fn status_code(&self) -> u16 {
        match self {
            SiteError::NotFound(_) => NOT_FOUND,
            SiteError::AlreadyExists(_) => CONFLICT,
            SiteError::ValidationError(_) => BAD_REQUEST,
            SiteError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
