//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, plus the boxed entity error
//! that carries a collection's own error type back to its client.

use crate::error::{HttpStatus, CONFLICT, INTERNAL_ERROR, NOT_FOUND};

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` when the error is not an entity error of type `E`.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

impl HttpStatus for FrameworkError {
    fn status_code(&self) -> u16 {
        match self {
            FrameworkError::NotFound(_) => NOT_FOUND,
            FrameworkError::Conflict(_) => CONFLICT,
            FrameworkError::ActorClosed
            | FrameworkError::ActorDropped
            | FrameworkError::EntityError(_) => INTERNAL_ERROR,
        }
    }
}
