//! Base entity model shared by every stored record.
//!
//! # Responsibility
//! - Define the identity and lifecycle metadata common to all stored records.
//! - Provide the capability contract (`Entity`) the storage layer keys on.
//!
//! # Invariants
//! - `id` is assigned exactly once, at construction, and never mutated.
//! - Lifecycle fields (`created_at`, `updated_at`, `is_active`, `deleted`)
//!   are inert: no repository or service operation reads or writes them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every stored record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// String-typed so callers can probe the store with arbitrary foreign ids.
pub type EntityId = String;

/// Identity plus lifecycle metadata embedded in every concrete record.
///
/// The lifecycle fields are declared for schema compatibility and stay
/// inert: nothing in the storage stack populates or consults them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    /// Stable global ID used as the storage key.
    pub id: EntityId,
    /// Creation timestamp. Never populated by any operation.
    pub created_at: Option<String>,
    /// Last-modification timestamp. Never populated by any operation.
    pub updated_at: Option<String>,
    /// Active flag. Starts `true`; never consulted by any operation.
    pub is_active: bool,
    /// Soft-delete tombstone. Starts `false`; never consulted by any
    /// operation.
    pub deleted: bool,
}

impl EntityMeta {
    /// Creates metadata with a generated stable ID.
    ///
    /// # Invariants
    /// - Timestamps are initialized to `None`.
    /// - `is_active` starts `true`, `deleted` starts `false`.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Creates metadata with a caller-provided stable ID.
    ///
    /// Used by import paths and tests where identity already exists
    /// externally.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this record's lifetime.
    pub fn with_id(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            is_active: true,
            deleted: false,
        }
    }

    /// Marks this record as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.deleted = false;
    }
}

impl Default for EntityMeta {
    /// Default metadata still carries a fresh unique ID.
    fn default() -> Self {
        Self::new()
    }
}

/// Capability contract for anything a repository can store.
///
/// Storage keys entries under the record's self-reported identity, so the
/// returned slice must stay stable for the record's lifetime.
pub trait Entity: Clone {
    /// Returns the stable ID this record is keyed under.
    fn id(&self) -> &str;
}
