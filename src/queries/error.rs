use crate::error::{HttpStatus, BAD_REQUEST};
use crate::incoming_delivery_actor::IncomingDeliveryError;
use crate::packing_slip_actor::PackingSlipError;
use crate::shipment_actor::ShipmentError;
use crate::work_order_actor::WorkOrderError;
use thiserror::Error;

/// Failure while assembling a read model.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("Invalid page {0}: pages start at 1")]
    InvalidPage(usize),

    #[error(transparent)]
    WorkOrder(#[from] WorkOrderError),

    #[error(transparent)]
    PackingSlip(#[from] PackingSlipError),

    #[error(transparent)]
    Shipment(#[from] ShipmentError),

    #[error(transparent)]
    IncomingDelivery(#[from] IncomingDeliveryError),
}

impl HttpStatus for QueryError {
    fn status_code(&self) -> u16 {
        match self {
            QueryError::InvalidPage(_) => BAD_REQUEST,
            QueryError::WorkOrder(e) => e.status_code(),
            QueryError::PackingSlip(e) => e.status_code(),
            QueryError::Shipment(e) => e.status_code(),
            QueryError::IncomingDelivery(e) => e.status_code(),
        }
    }
}
