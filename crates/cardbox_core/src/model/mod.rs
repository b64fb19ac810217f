//! Domain model for stored records.
//!
//! # Responsibility
//! - Define canonical data structures used by the storage stack.
//! - Keep one base metadata shape shared by every concrete record.
//!
//! # Invariants
//! - Every stored record is identified by a stable `EntityId`.
//! - Lifecycle metadata is declared on the base shape but never driven by
//!   storage operations.

pub mod entity;
pub mod user;
