//! Error types for the Shipment actor.

use crate::error::{
    HttpStatus, BAD_REQUEST, CONFLICT, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND,
};
use crate::framework::FrameworkError;
use crate::packing_slip_actor::PackingSlipError;
use thiserror::Error;

/// Errors that can occur during shipment operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShipmentError {
    #[error("Shipment not found: {0}")]
    NotFound(String),

    /// The customer already has a current shipment with this label.
    #[error("Shipment already exists: {0}")]
    AlreadyExists(String),

    #[error("Packing slip not found: {0}")]
    PackingSlipNotFound(String),

    #[error("Packing slip already shipped on {0}")]
    PackingSlipAlreadyShipped(String),

    /// Past versions are kept as history only.
    #[error("Shipment {0} is a past version")]
    PastVersion(String),

    #[error("Shipment validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ShipmentError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<ShipmentError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => ShipmentError::NotFound(id),
            Err(FrameworkError::Conflict(key)) => ShipmentError::AlreadyExists(key),
            Err(other) => ShipmentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<PackingSlipError> for ShipmentError {
    fn from(e: PackingSlipError) -> Self {
        match e {
            PackingSlipError::NotFound(id) => ShipmentError::PackingSlipNotFound(id),
            PackingSlipError::AlreadyShipped(on) => ShipmentError::PackingSlipAlreadyShipped(on),
            other => ShipmentError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for ShipmentError {
    fn status_code(&self) -> u16 {
        match self {
            ShipmentError::NotFound(_) | ShipmentError::PackingSlipNotFound(_) => NOT_FOUND,
            ShipmentError::AlreadyExists(_) | ShipmentError::PackingSlipAlreadyShipped(_) => {
                CONFLICT
            }
            ShipmentError::PastVersion(_) => METHOD_NOT_ALLOWED,
            ShipmentError::ValidationError(_) => BAD_REQUEST,
            ShipmentError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
