//! Document import and export.
//!
//! # Responsibility
//! - Flatten hierarchical section documents into outline entries.
//! - Serialize the entry sequence into a portable JSON document.
//!
//! # Invariants
//! - Import order is deterministic and follows document order.
//! - Export is lossless for every entry field.

pub mod demo;
pub mod export;
pub mod import;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for exchange APIs.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Errors from document parsing and serialization.
#[derive(Debug)]
pub enum ExchangeError {
    /// Input text is not a valid document of the expected shape.
    InvalidDocument(serde_json::Error),
    /// Entries or field values could not be rendered as JSON.
    Serialize(serde_json::Error),
}

impl Display for ExchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocument(err) => write!(f, "invalid document: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize entries: {err}"),
        }
    }
}

impl Error for ExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDocument(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}
