//! [`ActorEntity`] implementation for the [`RouteStep`] catalog.

use super::RouteStepError;
use crate::framework::ActorEntity;
use crate::model::{RouteStep, RouteStepCreate, RouteStepId, RouteStepUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for RouteStep {
    type Id = RouteStepId;
    type Create = RouteStepCreate;
    type Update = RouteStepUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RouteStepError;

    fn from_create_params(id: RouteStepId, params: RouteStepCreate) -> Result<Self, RouteStepError> {
        let category = params.category.trim().to_uppercase();
        let name = params.name.trim().to_string();
        if category.is_empty() || name.is_empty() {
            return Err(RouteStepError::ValidationError(
                "category and name are required".into(),
            ));
        }
        Ok(Self {
            id,
            category,
            name,
            description: params.description,
        })
    }

    /// Names are unique within a category.
    fn unique_key(&self) -> Option<String> {
        Some(format!("{}/{}", self.category, self.name.to_uppercase()))
    }

    async fn on_update(&mut self, update: RouteStepUpdate, _ctx: &()) -> Result<(), RouteStepError> {
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), RouteStepError> {
        Ok(())
    }
}
