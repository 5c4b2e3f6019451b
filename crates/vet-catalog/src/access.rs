//! # Catalog Access Trait
//!
//! The engine's only collaborator seam. Implementations are read-only
//! from the engine's perspective; staleness across calls is acceptable
//! (reference data changes rarely), but each call must fail distinctly
//! between "not found" and "temporarily unavailable".

use async_trait::async_trait;

use crate::document::DocumentSchema;
use crate::error::CatalogError;
use crate::fraud::FraudPattern;
use crate::regulation::Regulation;
use crate::sanctions::{SanctionsEntry, SanctionsListType};

/// Read-only access to reference catalogs.
///
/// `Ok(None)` / an empty list means the data genuinely does not exist
/// (the engine surfaces a `no_applicable_rule` outcome); `Err` means the
/// catalog could not answer (the engine degrades the category to
/// `review`). Implementations must never conflate the two.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look up a regulation by code (case-insensitive).
    async fn find_regulation(&self, code: &str) -> Result<Option<Regulation>, CatalogError>;

    /// List entries on the given watchlist. When `country` is supplied,
    /// implementations should pre-filter to entries associated with that
    /// country — but entries with no country association must be kept.
    async fn list_sanctions_entries(
        &self,
        list_type: SanctionsListType,
        country: Option<&str>,
    ) -> Result<Vec<SanctionsEntry>, CatalogError>;

    /// List active fraud patterns, optionally restricted to a category.
    async fn list_active_fraud_patterns(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FraudPattern>, CatalogError>;

    /// Look up the expected field schema for a document type
    /// (case-insensitive).
    async fn find_document_schema(
        &self,
        doc_type: &str,
    ) -> Result<Option<DocumentSchema>, CatalogError>;
}
