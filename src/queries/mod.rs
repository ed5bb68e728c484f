//! Read models: denormalised views assembled from several collections.
//!
//! These are pure data-shaping pipelines. They only read, so they run in the
//! caller's task and talk to the actors through their clients.

pub mod error;
pub mod incoming_queue;
pub mod packing_queue;
pub mod shipments;

pub use error::QueryError;
pub use incoming_queue::incoming_queue;
pub use packing_queue::{packing_queue, PackingQueueEntry};
pub use shipments::{
    search_shipments, shipment_history, shipment_manifest, ManifestLine, ManifestSlip,
    PageSettings, ShipmentManifest, ShipmentSearch,
};
