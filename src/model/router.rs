use crate::model::RouteStepId;
use serde::{Deserialize, Serialize};

/// Name of the router step that hands parts to an outside vendor.
pub const SHIP_TO_VENDOR: &str = "SHIP TO VENDOR";

/// One step of a manufacturing router.
///
/// Category and name are copied from the route-step catalog when the step is
/// added so the router stays readable if the catalog entry changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterStep {
    pub step: RouteStepId,
    pub category: String,
    pub name: String,
    pub description: String,
    /// Permanent sequence number, assigned once the owning job is released.
    pub step_code: Option<u32>,
}

impl RouterStep {
    pub fn new(
        step: RouteStepId,
        category: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            step,
            category: category.into(),
            name: name.into(),
            description: description.into(),
            step_code: None,
        }
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.step_code = Some(code);
        self
    }

    pub fn is_ship_to_vendor(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(SHIP_TO_VENDOR)
    }
}

/// Ordered manufacturing process path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Router {
    pub steps: Vec<RouterStep>,
}

impl Router {
    pub fn new(steps: Vec<RouterStep>) -> Self {
        Self { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn last(&self) -> Option<&RouterStep> {
        self.steps.last()
    }

    /// Step codes in router order, `None` for uncoded steps.
    pub fn step_codes(&self) -> Vec<Option<u32>> {
        self.steps.iter().map(|s| s.step_code).collect()
    }
}
