//! # Catalog Errors
//!
//! "Not found" is not an error — lookups return `Ok(None)` or an empty
//! list for missing reference data. [`CatalogError`] is reserved for the
//! cases where the catalog itself could not answer, which the engine
//! maps to a degraded per-category outcome.

use thiserror::Error;

/// Failure to consult the reference catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The backing store failed or timed out. Transient by assumption;
    /// the affected category degrades to `review`, never to `clear`.
    #[error("catalog temporarily unavailable: {0}")]
    Unavailable(String),
}
