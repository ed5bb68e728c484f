//! Error types for the User actor.

use crate::error::{HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, NOT_FOUND};
use crate::framework::FrameworkError;
use crate::site_actor::SiteError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same email already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The site the user is assigned to does not exist.
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<UserError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => UserError::AlreadyExists(key),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<SiteError> for UserError {
    fn from(e: SiteError) -> Self {
        match e {
            SiteError::NotFound(id) => UserError::SiteNotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for UserError {
    fn status_code(&self) -> u16 {
        match self {
            UserError::NotFound(_) | UserError::SiteNotFound(_) => NOT_FOUND,
            UserError::AlreadyExists(_) => CONFLICT,
            UserError::ValidationError(_) => BAD_REQUEST,
            UserError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
