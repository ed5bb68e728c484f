//! [`ActorEntity`] implementation for [`RouteTemplate`].
//!
//! Every template step must exist in the route-step catalog.

use super::RouteTemplateError;
use crate::clients::RouteStepClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{
    RouteTemplate, RouteTemplateCreate, RouteTemplateId, RouteTemplateUpdate, TemplateStep,
};
use async_trait::async_trait;

async fn check_steps(
    catalog: &RouteStepClient,
    steps: &[TemplateStep],
) -> Result<(), RouteTemplateError> {
    for step in steps {
        catalog.require(step.step).await?;
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for RouteTemplate {
    type Id = RouteTemplateId;
    type Create = RouteTemplateCreate;
    type Update = RouteTemplateUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = RouteStepClient;
    type Error = RouteTemplateError;

    fn from_create_params(
        id: RouteTemplateId,
        params: RouteTemplateCreate,
    ) -> Result<Self, RouteTemplateError> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(RouteTemplateError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            name,
            description: params.description,
            steps: params.steps,
        })
    }

    async fn on_create(&mut self, catalog: &RouteStepClient) -> Result<(), RouteTemplateError> {
        check_steps(catalog, &self.steps).await
    }

    async fn on_update(
        &mut self,
        update: RouteTemplateUpdate,
        catalog: &RouteStepClient,
    ) -> Result<(), RouteTemplateError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(RouteTemplateError::ValidationError("name is required".into()));
            }
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(steps) = update.steps {
            check_steps(catalog, &steps).await?;
            self.steps = steps;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &RouteStepClient,
    ) -> Result<(), RouteTemplateError> {
        Ok(())
    }
}
