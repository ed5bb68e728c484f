use crate::model::{RouteStepId, RouterStep};
use serde::{Deserialize, Serialize};

/// A catalog entry for a process step (e.g. MACHINING / Mill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub id: RouteStepId,
    pub category: String,
    pub name: String,
    pub description: String,
}

impl RouteStep {
    /// A router entry referring to this catalog step, without a code.
    pub fn to_router_step(&self, description: Option<String>) -> RouterStep {
        RouterStep::new(
            self.id,
            self.category.clone(),
            self.name.clone(),
            description.unwrap_or_else(|| self.description.clone()),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStepCreate {
    pub category: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteStepUpdate {
    pub description: Option<String>,
}
