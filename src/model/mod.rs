//! Documents of the shop-floor system and their create/update payloads.
//!
//! Behaviour lives with the actors (`*_actor::entity`); these are plain data.

pub mod ids;
pub mod incoming_delivery;
pub mod job;
pub mod lot;
pub mod packing_slip;
pub mod route_step;
pub mod route_template;
pub mod router;
pub mod shipment;
pub mod site;
pub mod user;
pub mod work_order;

pub use ids::*;
pub use incoming_delivery::*;
pub use job::*;
pub use lot::*;
pub use packing_slip::*;
pub use route_step::*;
pub use route_template::*;
pub use router::*;
pub use shipment::*;
pub use site::*;
pub use user::*;
pub use work_order::*;
