//! Flutter-facing bindings for the Hybrid Notes outline engine.

pub mod api;
