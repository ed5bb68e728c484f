//! Error types for the WorkOrder actor.

use crate::error::{
    HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND,
};
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during work order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkOrderError {
    /// The requested work order was not found.
    #[error("Work order not found: {0}")]
    NotFound(String),

    /// The customer already has a work order with this number.
    #[error("Work order already exists: {0}")]
    AlreadyExists(String),

    #[error("Work order {work_order} has no line {line}")]
    ItemNotFound { work_order: String, line: u32 },

    #[error("Work order validation error: {0}")]
    ValidationError(String),

    /// Work orders are kept for traceability.
    #[error("Work orders cannot be deleted")]
    DeleteForbidden,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WorkOrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<WorkOrderError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => WorkOrderError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => WorkOrderError::AlreadyExists(key),
            Err(other) => WorkOrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for WorkOrderError {
    fn status_code(&self) -> u16 {
        match self {
            WorkOrderError::NotFound(_) | WorkOrderError::ItemNotFound { .. } => NOT_FOUND,
            WorkOrderError::AlreadyExists(_) => CONFLICT,
            WorkOrderError::ValidationError(_) => BAD_REQUEST,
            WorkOrderError::DeleteForbidden => METHOD_NOT_ALLOWED,
            WorkOrderError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
