//! Destination-code inference for packing-slip lines.
//!
//! A line shipped to the customer is coded with the last router step; a line
//! shipped to a vendor is coded with the router's `SHIP TO VENDOR` step.
//! Items without a router take the configured default code.

use crate::model::{Destination, Router};
use serde::Serialize;

/// Outcome of inferring a destination code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DestinationCode {
    Code(u32),
    /// More than one `SHIP TO VENDOR` step; left for a person to resolve.
    Ambiguous { candidates: usize },
    /// No suitable step, or the suitable step has no code yet.
    Unresolved,
}

pub fn infer_destination_code(
    router: Option<&Router>,
    destination: Destination,
    default_code: u32,
) -> DestinationCode {
    let router = match router {
        Some(router) if !router.is_empty() => router,
        _ => return DestinationCode::Code(default_code),
    };

    match destination {
        Destination::Customer => router
            .last()
            .and_then(|s| s.step_code)
            .map_or(DestinationCode::Unresolved, DestinationCode::Code),
        Destination::Vendor => {
            let vendor_steps: Vec<_> = router
                .steps
                .iter()
                .filter(|s| s.is_ship_to_vendor())
                .collect();
            match vendor_steps.as_slice() {
                [] => DestinationCode::Unresolved,
                [only] => only
                    .step_code
                    .map_or(DestinationCode::Unresolved, DestinationCode::Code),
                many => DestinationCode::Ambiguous {
                    candidates: many.len(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RouteStepId, RouterStep};

    fn router() -> Router {
        Router::new(vec![
            RouterStep::new(RouteStepId(1), "MACHINING", "Mill", "").with_code(100),
            RouterStep::new(RouteStepId(2), "OUTSOURCE", "Ship to Vendor", "anodize").with_code(200),
            RouterStep::new(RouteStepId(3), "SHIPPING", "Ship", "").with_code(300),
        ])
    }

    #[test]
    fn test_no_router_uses_default() {
        assert_eq!(
            infer_destination_code(None, Destination::Customer, 7),
            DestinationCode::Code(7)
        );
        assert_eq!(
            infer_destination_code(Some(&Router::default()), Destination::Vendor, 7),
            DestinationCode::Code(7)
        );
    }

    #[test]
    fn test_customer_uses_last_step() {
        assert_eq!(
            infer_destination_code(Some(&router()), Destination::Customer, 0),
            DestinationCode::Code(300)
        );
    }

    #[test]
    fn test_vendor_uses_single_ship_to_vendor_step() {
        assert_eq!(
            infer_destination_code(Some(&router()), Destination::Vendor, 0),
            DestinationCode::Code(200)
        );
    }

    #[test]
    fn test_multiple_vendor_steps_are_ambiguous() {
        let mut r = router();
        r.steps.push(
            RouterStep::new(RouteStepId(2), "OUTSOURCE", "SHIP TO VENDOR", "plate").with_code(400),
        );
        assert_eq!(
            infer_destination_code(Some(&r), Destination::Vendor, 0),
            DestinationCode::Ambiguous { candidates: 2 }
        );
    }

    #[test]
    fn test_uncoded_or_missing_steps_are_unresolved() {
        let uncoded = Router::new(vec![RouterStep::new(RouteStepId(1), "SHIPPING", "Ship", "")]);
        assert_eq!(
            infer_destination_code(Some(&uncoded), Destination::Customer, 0),
            DestinationCode::Unresolved
        );
        assert_eq!(
            infer_destination_code(Some(&uncoded), Destination::Vendor, 0),
            DestinationCode::Unresolved
        );
    }
}
