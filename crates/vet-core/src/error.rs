//! # Core Validation Errors
//!
//! Parse and construction failures for the domain primitives. These are
//! the only errors that reject a verification request outright — every
//! later failure is isolated per category (see the engine crate).

use thiserror::Error;

/// Validation failure while constructing or parsing a domain primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Entity name is empty or whitespace-only.
    #[error("entity name must not be empty")]
    EmptyEntityName,

    /// An identifier value is empty.
    #[error("identifier value for '{kind}' must not be empty")]
    EmptyIdentifier {
        /// The identifier kind carrying the empty value.
        kind: String,
    },

    /// Unknown entity kind string.
    #[error("unknown entity kind: '{0}' (expected 'individual' or 'organization')")]
    UnknownEntityKind(String),

    /// Unknown check category string.
    #[error("unknown check category: '{0}'")]
    UnknownCategory(String),

    /// Unknown identifier kind string.
    #[error("unknown identifier kind: '{0}'")]
    UnknownIdentifierKind(String),

    /// Unknown verification status string.
    #[error("unknown verification status: '{0}'")]
    UnknownStatus(String),
}
