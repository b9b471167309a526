//! Outline search entry points.
//!
//! # Responsibility
//! - Derive filtered views of the entry sequence.
//! - Keep quick type-filter presets inside core.

pub mod filter;
