//! Outline domain model.
//!
//! # Responsibility
//! - Define the single entry record shared by chat and edit projections.
//! - Classify free-form type tags into display tones.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Structure is derived from sequence order plus `indent`, never from
//!   `parent_id`.

pub mod entry;
pub mod palette;
