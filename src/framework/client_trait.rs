//! # ActorClient Trait
//!
//! Common surface for the typed clients: `get`, `require`, `list` and
//! `delete` come for free once a client says how to reach its
//! `ResourceClient` and how to translate framework errors.

use super::{ActorEntity, FrameworkError, Page, Query, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID, treating absence as a not-found error.
    #[tracing::instrument(skip(self))]
    async fn require(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().get(id.clone()).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Self::map_error(FrameworkError::NotFound(id.to_string()))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// List entities matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: Query<T>) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
