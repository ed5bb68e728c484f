use crate::model::ReceivedLine;

#[derive(Debug, Clone)]
pub enum IncomingDeliveryAction {
    /// Records the delivery as received, with the quantities counted in.
    Receive(Vec<ReceivedLine>),
    UndoReceive,
}

/// Results from IncomingDeliveryActions - variants match 1:1 with IncomingDeliveryAction
#[derive(Debug, Clone)]
pub enum IncomingDeliveryActionResult {
    Receive(()),
    UndoReceive(()),
}
