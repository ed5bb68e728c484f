use crate::model::{RouteStepId, RouteTemplateId};
use serde::{Deserialize, Serialize};

/// Reusable router blueprint, copied into job and lot routers on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTemplate {
    pub id: RouteTemplateId,
    pub name: String,
    pub description: String,
    pub steps: Vec<TemplateStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStep {
    pub step: RouteStepId,
    /// Overrides the catalog description when set.
    pub description: Option<String>,
}

impl TemplateStep {
    pub fn new(step: RouteStepId) -> Self {
        Self {
            step,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTemplateCreate {
    pub name: String,
    pub description: String,
    pub steps: Vec<TemplateStep>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<TemplateStep>>,
}
