//! Error types for the IncomingDelivery actor.

use crate::error::{HttpStatus, BAD_REQUEST, INTERNAL_ERROR, METHOD_NOT_ALLOWED, NOT_FOUND};
use crate::framework::FrameworkError;
use crate::shipment_actor::ShipmentError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IncomingDeliveryError {
    #[error("Incoming delivery not found: {0}")]
    NotFound(String),

    #[error("Shipment not found: {0}")]
    ShipmentNotFound(String),

    #[error("Incoming delivery already received")]
    AlreadyReceived,

    #[error("Incoming delivery has not been received")]
    NotReceived,

    #[error("Incoming delivery validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for IncomingDeliveryError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity_error::<IncomingDeliveryError>() {
            Ok(e) => e,
            Err(FrameworkError::NotFound(id)) => IncomingDeliveryError::NotFound(id),
            Err(other) => IncomingDeliveryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ShipmentError> for IncomingDeliveryError {
    fn from(e: ShipmentError) -> Self {
        match e {
            ShipmentError::NotFound(id) => IncomingDeliveryError::ShipmentNotFound(id),
            other => IncomingDeliveryError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl HttpStatus for IncomingDeliveryError {
    fn status_code(&self) -> u16 {
        match self {
            IncomingDeliveryError::NotFound(_) | IncomingDeliveryError::ShipmentNotFound(_) => {
                NOT_FOUND
            }
            IncomingDeliveryError::AlreadyReceived | IncomingDeliveryError::NotReceived => {
                METHOD_NOT_ALLOWED
            }
            IncomingDeliveryError::ValidationError(_) => BAD_REQUEST,
            IncomingDeliveryError::ActorCommunicationError(_) => INTERNAL_ERROR,
        }
    }
}
