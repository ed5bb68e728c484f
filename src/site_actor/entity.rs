//! [`ActorEntity`] implementation for [`Site`].

use super::SiteError;
use crate::framework::ActorEntity;
use crate::model::{Site, SiteCreate, SiteId, SiteUpdate};
use async_trait::async_trait;

fn required(field: &str, value: String) -> Result<String, SiteError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(SiteError::ValidationError(format!("{field} is required")));
    }
    Ok(value)
}

#[async_trait]
impl ActorEntity for Site {
    type Id = SiteId;
    type Create = SiteCreate;
    type Update = SiteUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = SiteError;

    fn from_create_params(id: SiteId, params: SiteCreate) -> Result<Self, SiteError> {
        Ok(Self {
            id,
            name: required("name", params.name)?,
            location: params.location.trim().to_string(),
            timezone: required("timezone", params.timezone)?,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.to_lowercase())
    }

    async fn on_update(&mut self, update: SiteUpdate, _ctx: &()) -> Result<(), SiteError> {
        if let Some(name) = update.name {
            self.name = required("name", name)?;
        }
        if let Some(location) = update.location {
            self.location = location.trim().to_string();
        }
        if let Some(timezone) = update.timezone {
            self.timezone = required("timezone", timezone)?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), SiteError> {
        Ok(())
    }
}
