//! [`ActorEntity`] implementation for [`User`].
//!
//! Users may be assigned to a site; the site is checked through the
//! injected [`SiteClient`] whenever it is set.

use super::UserError;
use crate::clients::SiteClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{SiteId, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;

async fn check_site(sites: &SiteClient, site: Option<SiteId>) -> Result<(), UserError> {
    if let Some(site) = site {
        sites.require(site).await?;
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = SiteClient;
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let email = params.email.trim().to_string();
        if !email.contains('@') {
            return Err(UserError::ValidationError(format!("invalid email '{email}'")));
        }
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(UserError::ValidationError("name is required".into()));
        }
        Ok(Self {
            id,
            email,
            name,
            site: params.site,
            is_admin: false,
            is_active: true,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.email.to_lowercase())
    }

    async fn on_create(&mut self, sites: &SiteClient) -> Result<(), UserError> {
        check_site(sites, self.site).await
    }

    /// # Fields Updated
    /// - `name`, `site` (checked), `is_admin`, `is_active`
    async fn on_update(&mut self, update: UserUpdate, sites: &SiteClient) -> Result<(), UserError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(UserError::ValidationError("name is required".into()));
            }
            self.name = name.trim().to_string();
        }
        if update.site.is_some() {
            check_site(sites, update.site).await?;
            self.site = update.site;
        }
        if let Some(is_admin) = update.is_admin {
            self.is_admin = is_admin;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &SiteClient) -> Result<(), UserError> {
        Ok(())
    }
}
