use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient};
use crate::model::{SiteId, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, user: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(user).await.map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    /// Case-insensitive lookup by email.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let email = email.trim().to_lowercase();
        let page = self
            .list(Query::filter(move |u: &User| u.email.to_lowercase() == email))
            .await?;
        Ok(page.items.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn users_at_site(&self, site: SiteId) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        let page = self
            .list(Query::filter(move |u: &User| u.site == Some(site)))
            .await?;
        Ok(page.items)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}
