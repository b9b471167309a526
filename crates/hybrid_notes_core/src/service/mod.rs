//! Outline session services.
//!
//! # Responsibility
//! - Orchestrate store mutations, selection and filters into commands.
//! - Keep UI/FFI layers decoupled from sequence details.

pub mod command;
pub mod outline_service;
