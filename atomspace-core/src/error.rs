//! Error types for atomspace-core.

use thiserror::Error;

use crate::atoms::AtomId;

/// Result type alias using atomspace-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during AtomSpace operations.
///
/// Lookups never produce errors; absence is reported through `Option`,
/// `bool` or an empty `Vec`. The only hard failure of the store itself is a
/// link insertion that references a missing atom.
#[derive(Error, Debug)]
pub enum Error {
    /// A link referenced an atom that does not exist in the store
    #[error("Atom {missing} not found in AtomSpace")]
    DanglingReference { missing: AtomId },

    /// An atom type name could not be parsed
    #[error("Unknown atom type: {0}")]
    UnknownAtomType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a dangling reference error.
    pub fn dangling_reference(missing: AtomId) -> Self {
        Self::DanglingReference { missing }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error rejected a link insertion.
    pub fn is_dangling_reference(&self) -> bool {
        matches!(self, Self::DanglingReference { .. })
    }
}
