//! User domain model.
//!
//! # Responsibility
//! - Define the one concrete record type shipped with this crate.
//!
//! # Invariants
//! - `meta.id` identifies the user for its whole lifetime.
//! - Attributes carry no format rules; any string, including empty, is
//!   accepted.

use crate::model::entity::{Entity, EntityId, EntityMeta};
use serde::{Deserialize, Serialize};

/// Concrete stored record: base metadata plus user attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity and lifecycle metadata, serialized at the top level.
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Display name.
    pub name: String,
    /// Contact email. No format check is applied.
    pub email: String,
}

impl User {
    /// Creates a user with a generated stable ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            meta: EntityMeta::new(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Creates a user with a caller-provided stable ID.
    ///
    /// Used by import paths and tests where identity already exists
    /// externally.
    pub fn with_id(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            meta: EntityMeta::with_id(id),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for User {
    /// Blank attributes, fresh unique ID.
    fn default() -> Self {
        Self::new("", "")
    }
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.meta.id
    }
}
