//! Entry storage abstractions.
//!
//! # Responsibility
//! - Define the single-writer contract over the ordered entry sequence.
//! - Keep sequence mutation details out of session orchestration.
//!
//! # Invariants
//! - Mutations referencing unknown ids are no-ops, never errors.
//! - Every applied mutation publishes a new snapshot `Arc`.

pub mod entry_store;
