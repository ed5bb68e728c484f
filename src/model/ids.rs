//! Type-safe identifiers, one per collection.
//!
//! Ids are assigned by the owning actor from a counter and displayed as
//! `<kind>_<n>`, e.g. `packing_slip_12`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! define_id {
    ($($entity:ident => $prefix:literal),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Type-safe identifier for " $entity " documents."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
                pub struct [<$entity Id>](pub u32);

                impl From<u32> for [<$entity Id>] {
                    fn from(id: u32) -> Self {
                        Self(id)
                    }
                }

                impl Display for [<$entity Id>] {
                    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, concat!($prefix, "_{}"), self.0)
                    }
                }
            )+
        }
    };
}

define_id! {
    Site => "site",
    User => "user",
    WorkOrder => "work_order",
    PackingSlip => "packing_slip",
    Shipment => "shipment",
    IncomingDelivery => "incoming_delivery",
    Job => "job",
    Lot => "lot",
    RouteStep => "route_step",
    RouteTemplate => "route_template",
}
