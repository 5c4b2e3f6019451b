//! # Engine Errors
//!
//! Only [`EngineError::InvalidInput`] aborts a verification call, and it
//! is raised before any sub-evaluator runs — there is no partial
//! processing of a malformed request. Every later failure (catalog
//! unavailability, deadline expiry, absent reference data) is isolated
//! into the affected category's outcome instead.

use thiserror::Error;

use vet_core::ValidationError;

/// Fatal request-boundary failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed entity or missing category-required auxiliary data.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
