//! # Generic Actor Server
//!
//! `ResourceActor` owns one collection and processes its requests one at a
//! time, so the store needs no locking.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use super::query::{Page, Query, SortOrder};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create**: assigns the next id, builds the entity, rejects duplicate
///   unique keys, runs `on_create`, stores the entity.
/// * **Get**: clone of the stored entity, or `None`.
/// * **List**: filter, order by id, window; reports the total match count.
/// * **Update / Action**: the hook runs on a copy, which is committed only
///   on success (and, for updates, only if the unique key stays unique).
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Clear**: drops every entity; ids are not reused afterwards.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Lot" instead of "shopfloor::model::lot::Lot"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;
                    let result = self.create(id, params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let page = self.list(&query);
                    debug!(entity_type, ?query, total = page.total, returned = page.items.len(), "List");
                    let _ = respond_to.send(Ok(page));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    warn!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        if let Some(key) = self.duplicate_key(None, &item) {
            return Err(FrameworkError::Conflict(key));
        }
        item.on_create(context).await.map_err(entity_error)?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn list(&self, query: &Query<T>) -> Page<T> {
        let matching: Vec<&T> = match query.order {
            SortOrder::Ascending => self.store.values().filter(|t| query.matches(t)).collect(),
            SortOrder::Descending => self
                .store
                .values()
                .rev()
                .filter(|t| query.matches(t))
                .collect(),
        };
        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Page { items, total }
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut candidate = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        candidate
            .on_update(update, context)
            .await
            .map_err(entity_error)?;
        if let Some(key) = self.duplicate_key(Some(id), &candidate) {
            return Err(FrameworkError::Conflict(key));
        }
        self.store.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut candidate = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let result = candidate
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;
        self.store.insert(id.clone(), candidate);
        Ok(result)
    }

    /// The unique key of `item` if another entity (other than `own_id`) holds it.
    fn duplicate_key(&self, own_id: Option<&T::Id>, item: &T) -> Option<String> {
        let key = item.unique_key()?;
        let taken = self.store.iter().any(|(other_id, other)| {
            Some(other_id) != own_id && other.unique_key().as_deref() == Some(key.as_str())
        });
        taken.then_some(key)
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
    struct BinId(u32);

    impl From<u32> for BinId {
        fn from(id: u32) -> Self {
            Self(id)
        }
    }

    impl std::fmt::Display for BinId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "bin_{}", self.0)
        }
    }

    #[derive(Clone, Debug)]
    struct Bin {
        code: String,
        capacity: u32,
    }

    #[derive(Debug)]
    struct BinCreate {
        code: String,
        capacity: u32,
    }

    #[derive(Debug)]
    struct BinUpdate {
        code: Option<String>,
    }

    #[derive(Debug)]
    enum BinAction {
        Fill(u32),
    }

    #[derive(Debug, thiserror::Error)]
    enum BinError {
        #[error("Bin overflow")]
        Overflow,
    }

    #[async_trait]
    impl ActorEntity for Bin {
        type Id = BinId;
        type Create = BinCreate;
        type Update = BinUpdate;
        type Action = BinAction;
        type ActionResult = u32;
        type Context = ();
        type Error = BinError;

        fn from_create_params(_id: BinId, params: BinCreate) -> Result<Self, BinError> {
            Ok(Self {
                code: params.code,
                capacity: params.capacity,
            })
        }

        fn unique_key(&self) -> Option<String> {
            Some(self.code.clone())
        }

        async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), BinError> {
            if let Some(code) = update.code {
                self.code = code;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, BinError> {
            match action {
                BinAction::Fill(n) => {
                    // Mutate first, then fail: the stored copy must stay untouched.
                    self.capacity = self.capacity.saturating_sub(n);
                    if self.capacity == 0 {
                        return Err(BinError::Overflow);
                    }
                    Ok(self.capacity)
                }
            }
        }
    }

    fn spawn_bins() -> ResourceClient<Bin> {
        let (actor, client) = ResourceActor::<Bin>::new(8);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_duplicate_unique_key_is_a_conflict() {
        let client = spawn_bins();
        client
            .create(BinCreate { code: "A1".into(), capacity: 5 })
            .await
            .unwrap();

        let err = client
            .create(BinCreate { code: "A1".into(), capacity: 9 })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Conflict(ref key) if key == "A1"));

        let second = client
            .create(BinCreate { code: "B1".into(), capacity: 9 })
            .await
            .unwrap();
        let err = client
            .update(second, BinUpdate { code: Some("A1".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_failed_action_leaves_entity_untouched() {
        let client = spawn_bins();
        let id = client
            .create(BinCreate { code: "C1".into(), capacity: 3 })
            .await
            .unwrap();

        assert_eq!(client.perform_action(id.clone(), BinAction::Fill(1)).await.unwrap(), 2);
        let err = client
            .perform_action(id.clone(), BinAction::Fill(5))
            .await
            .unwrap_err();
        assert!(matches!(
            err.into_entity_error::<BinError>(),
            Ok(BinError::Overflow)
        ));

        let bin = client.get(id).await.unwrap().unwrap();
        assert_eq!(bin.capacity, 2);
    }

    #[tokio::test]
    async fn test_list_orders_filters_and_windows() {
        let client = spawn_bins();
        for i in 0..5 {
            client
                .create(BinCreate { code: format!("D{i}"), capacity: i })
                .await
                .unwrap();
        }

        let page = client
            .list(
                Query::filter(|b: &Bin| b.capacity >= 1)
                    .order(SortOrder::Descending)
                    .window(1, 2),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 4);
        let codes: Vec<_> = page.items.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["D3", "D2"]);
    }

    #[tokio::test]
    async fn test_clear_does_not_reuse_ids() {
        let client = spawn_bins();
        let first = client
            .create(BinCreate { code: "E1".into(), capacity: 1 })
            .await
            .unwrap();
        assert_eq!(client.clear().await.unwrap(), 1);
        assert!(client.get(first).await.unwrap().is_none());

        let next = client
            .create(BinCreate { code: "E1".into(), capacity: 1 })
            .await
            .unwrap();
        assert_eq!(next, BinId(2));
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found() {
        let client = spawn_bins();
        let err = client.delete(BinId(42)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "bin_42"));
    }
}
