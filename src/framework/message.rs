//! # Generic Messages
//!
//! The request enum exchanged between `ResourceClient` and `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::query::{Page, Query};
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Operations understood by every resource actor.
///
/// The variants map to a document collection's lifecycle: create, read one,
/// list, update, delete, plus a resource-specific `Action` for business rules
/// that do not fit CRUD (release a job, scrap a lot, …) and `Clear` for
/// resetting fixtures.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Query<T>,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}
