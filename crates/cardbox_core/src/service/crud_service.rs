//! Entity use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for library callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs add no validation, transformation, or error translation.
//! - Service layer remains storage-agnostic; swapping the repository
//!   requires no caller change.

use crate::model::entity::Entity;
use crate::repo::entity_repo::{RepoResult, Repository};
use std::marker::PhantomData;

/// Use-case facade over one repository instance.
///
/// Holds exactly one repository, injected at construction and not mutable
/// afterward.
pub struct CrudService<E: Entity, R: Repository<E>> {
    repo: R,
    _marker: PhantomData<E>,
}

impl<E: Entity, R: Repository<E>> CrudService<E, R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _marker: PhantomData,
        }
    }

    /// Gets one entity by stable ID.
    ///
    /// # Contract
    /// - A miss is `Ok(None)`, not an error.
    pub fn get(&self, id: &str) -> RepoResult<Option<E>> {
        self.repo.get_by_id(id)
    }

    /// Lists every stored entity in the repository's iteration order.
    pub fn list_all(&self) -> RepoResult<Vec<E>> {
        self.repo.get_all()
    }

    /// Creates an entity through repository storage.
    ///
    /// # Contract
    /// - Keys the entry on the entity's own id.
    /// - Silently overwrites an existing entry with the same id.
    pub fn create(&self, entity: E) -> RepoResult<E> {
        self.repo.create(entity)
    }

    /// Replaces an existing entity by stable ID.
    ///
    /// Returns the repository-level not-found error unchanged.
    pub fn update(&self, id: &str, entity: E) -> RepoResult<E> {
        self.repo.update(id, entity)
    }

    /// Deletes an entity by stable ID. Returns whether one was present.
    pub fn delete(&self, id: &str) -> RepoResult<bool> {
        self.repo.delete(id)
    }
}
