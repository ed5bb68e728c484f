//! Listing support: a filter, an order and a window over an actor's store.
//!
//! This is the in-process counterpart of a `find().sort().skip().limit()`
//! query. Filters are plain closures evaluated inside the actor task.

use serde::Serialize;
use std::fmt;

/// Predicate evaluated against every stored entity.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Ordering of listed entities by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first (ascending id).
    #[default]
    Ascending,
    /// Newest first (descending id).
    Descending,
}

/// A listing request: filter, order and pagination window.
pub struct Query<T> {
    pub(crate) filter: Option<Predicate<T>>,
    pub(crate) order: SortOrder,
    pub(crate) offset: usize,
    pub(crate) limit: Option<usize>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            filter: None,
            order: SortOrder::Ascending,
            offset: 0,
            limit: None,
        }
    }
}

impl<T> Query<T> {
    /// Every entity, ascending.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only entities matching `predicate`.
    pub fn filter(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Some(Box::new(predicate)),
            ..Self::default()
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Skip `offset` matches and return at most `limit`.
    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    pub(crate) fn matches(&self, item: &T) -> bool {
        self.filter.as_ref().map_or(true, |f| f(item))
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filtered", &self.filter.is_some())
            .field("order", &self.order)
            .field("offset", &self.offset)
            .field("limit", &self.limit)
            .finish()
    }
}

/// One window of a listing plus the number of matches before windowing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
