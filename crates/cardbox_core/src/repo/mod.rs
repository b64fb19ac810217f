//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate container and locking details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) rather than
//!   exposing container state.
//! - Read misses are values (`None`, `false`), not errors.

pub mod entity_repo;
