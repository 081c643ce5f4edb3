//! # Entity Stores
//!
//! The persistence seam behind a `ResourceActor`. The actor owns exactly one store and is
//! the only thing that touches it, so implementations need no interior locking.
//!
//! [`MemoryStore`] is the default backend. Other backends (a database, a file) implement
//! [`EntityStore`] and are handed to [`ResourceActor::with_store`](crate::ResourceActor::with_store).

use crate::entity::ActorEntity;
use std::collections::BTreeMap;

/// Failures reported by a store backend.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    /// The backend rejected or could not complete the operation.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Abstract persistence for one entity type, keyed by its numeric identity.
pub trait EntityStore<T: ActorEntity>: Send + 'static {
    /// Allocates the identity for the next created entity.
    fn next_id(&mut self) -> Result<T::Id, StoreError>;

    /// Every stored entity in ascending id order.
    fn find_all(&self) -> Result<Vec<T>, StoreError>;

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError>;

    /// Inserts the entity or overwrites the one with the same identity.
    fn save(&mut self, item: T) -> Result<T, StoreError>;

    /// Removes the entity, returning it if it was present.
    fn delete(&mut self, id: &T::Id) -> Result<Option<T>, StoreError>;

    /// Every entity matching `filter`, in ascending id order.
    fn find_matching(&self, filter: &T::Filter) -> Result<Vec<T>, StoreError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|item| item.matches(filter))
            .collect())
    }

    /// Removes every entity matching `filter` and returns how many were removed.
    fn delete_matching(&mut self, filter: &T::Filter) -> Result<usize, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by an ordered map. Ids are handed out from 1 upwards and never
/// reused, even after deletes.
#[derive(Debug)]
pub struct MemoryStore<T: ActorEntity> {
    items: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: ActorEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> for MemoryStore<T> {
    fn next_id(&mut self) -> Result<T::Id, StoreError> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("id space exhausted".to_string()))?;
        Ok(T::Id::from(id))
    }

    fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.values().cloned().collect())
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.items.get(id).cloned())
    }

    fn save(&mut self, item: T) -> Result<T, StoreError> {
        self.items.insert(item.id().clone(), item.clone());
        Ok(item)
    }

    fn delete(&mut self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.items.remove(id))
    }

    fn find_matching(&self, filter: &T::Filter) -> Result<Vec<T>, StoreError> {
        Ok(self
            .items
            .values()
            .filter(|item| item.matches(filter))
            .cloned()
            .collect())
    }

    fn delete_matching(&mut self, filter: &T::Filter) -> Result<usize, StoreError> {
        let before = self.items.len();
        self.items.retain(|_, item| !item.matches(filter));
        Ok(before - self.items.len())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
