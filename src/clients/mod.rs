//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client maps framework errors to its resource's error enum and turns
//! actions into plain method calls.

pub mod incoming_delivery_client;
pub mod job_client;
pub mod labels;
pub mod lot_client;
pub mod packing_slip_client;
pub mod route_step_client;
pub mod route_template_client;
pub mod shipment_client;
pub mod site_client;
pub mod user_client;
pub mod work_order_client;

pub use incoming_delivery_client::*;
pub use job_client::*;
pub use lot_client::*;
pub use packing_slip_client::*;
pub use route_step_client::*;
pub use route_template_client::*;
pub use shipment_client::*;
pub use site_client::*;
pub use user_client::*;
pub use work_order_client::*;
