//! Entity repository contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over keyed record storage.
//! - Keep container and locking details inside the storage boundary.
//!
//! # Invariants
//! - `update` is the only operation that can fail: a `get_by_id` miss is
//!   `Ok(None)` and a `delete` miss is `Ok(false)`.
//! - Records cross this boundary by value: moved in on writes, cloned out
//!   on reads. Caller-side mutation after a write never reaches the store.

use crate::model::entity::{Entity, EntityId};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// `update` was called with an id absent from the store.
    NotFound(EntityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for entity CRUD operations.
///
/// Operations take `&self` so implementations pick their own interior
/// mutability, and return `RepoResult` so variants with transport failures
/// fit the same contract.
pub trait Repository<E: Entity> {
    /// Returns the entity stored under `id`, or `None` on a miss.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<E>>;
    /// Returns every stored entity in the implementation's deterministic
    /// iteration order.
    fn get_all(&self) -> RepoResult<Vec<E>>;
    /// Stores `entity` under its own id, silently overwriting any existing
    /// entry with that id, and returns it.
    fn create(&self, entity: E) -> RepoResult<E>;
    /// Replaces the entry stored under `id` wholesale with `entity`.
    ///
    /// The `id` argument is authoritative: the replacement lands under it
    /// regardless of the entity's own id field.
    fn update(&self, id: &str, entity: E) -> RepoResult<E>;
    /// Removes the entry stored under `id`. Returns whether one was present.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// Transient repository backed by an in-process ordered map.
///
/// Listing order is ascending by id. A single reader-writer lock guards
/// every operation; there is no transaction or atomicity contract across
/// operations.
pub struct InMemoryRepository<E: Entity> {
    entries: RwLock<BTreeMap<EntityId, E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates an empty store.
    ///
    /// # Side effects
    /// - Emits a `store_open` logging event.
    pub fn new() -> Self {
        info!("event=store_open module=repo status=ok mode=memory");
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Returns whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // Poisoning is recovered: every write is a single map mutation, so a
    // recovered map is never half-updated.
    fn read_entries(&self) -> RwLockReadGuard<'_, BTreeMap<EntityId, E>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, BTreeMap<EntityId, E>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn get_by_id(&self, id: &str) -> RepoResult<Option<E>> {
        Ok(self.read_entries().get(id).cloned())
    }

    fn get_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.read_entries().values().cloned().collect())
    }

    fn create(&self, entity: E) -> RepoResult<E> {
        let mut entries = self.write_entries();
        entries.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    fn update(&self, id: &str, entity: E) -> RepoResult<E> {
        let mut entries = self.write_entries();
        if !entries.contains_key(id) {
            return Err(RepoError::NotFound(id.to_string()));
        }
        entries.insert(id.to_string(), entity.clone());
        Ok(entity)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        Ok(self.write_entries().remove(id).is_some())
    }
}
