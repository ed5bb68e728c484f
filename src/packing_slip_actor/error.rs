//! Error types for the PackingSlip actor.

use crate::error::{
    HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND,
};
use crate::framework::FrameworkError;
use crate::work_order_actor::WorkOrderError;
use thiserror::Error;

/// Errors that can occur during packing slip operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackingSlipError {
    #[error("Packing slip not found: {0}")]
    NotFound(String),

    /// The customer already has a packing slip with this label.
    #[error("Packing slip already exists: {0}")]
    AlreadyExists(String),

    #[error("Work order not found: {0}")]
    WorkOrderNotFound(String),

    #[error("Work order {work_order} has no line {line}")]
    LineNotFound { work_order: String, line: u32 },

    /// The slip is on a shipment and can no longer be edited or deleted.
    #[error("Packing slip is assigned to shipment {0}")]
    AssignedToShipment(String),

    /// The slip is already travelling on a different shipment.
    #[error("Packing slip already shipped on {0}")]
    AlreadyShipped(String),

    #[error("Packing slip validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PackingSlipError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<PackingSlipError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => PackingSlipError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => PackingSlipError::AlreadyExists(key),
            Err(other) => PackingSlipError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<WorkOrderError> for PackingSlipError {
    fn from(e: WorkOrderError) -> Self {
        match e {
            WorkOrderError::NotFound(id) => PackingSlipError::WorkOrderNotFound(id),
            WorkOrderError::ItemNotFound { work_order, line } => {
                PackingSlipError::LineNotFound { work_order, line }
            }
            other => PackingSlipError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for PackingSlipError {
    fn status_code(&self) -> u16 {
        match self {
            PackingSlipError::NotFound(_)
            | PackingSlipError::WorkOrderNotFound(_)
            | PackingSlipError::LineNotFound { .. } => NOT_FOUND,
            PackingSlipError::AlreadyExists(_) | PackingSlipError::AlreadyShipped(_) => CONFLICT,
            PackingSlipError::AssignedToShipment(_) => METHOD_NOT_ALLOWED,
            PackingSlipError::ValidationError(_) => BAD_REQUEST,
            PackingSlipError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
