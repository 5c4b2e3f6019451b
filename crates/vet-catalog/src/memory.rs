//! # In-Memory Catalog
//!
//! A [`Catalog`] implementation backed by plain collections. Used for
//! tests and for deployments that load reference data at startup from a
//! snapshot; the persistence layer proper lives outside the engine.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::access::Catalog;
use crate::document::DocumentSchema;
use crate::error::CatalogError;
use crate::fraud::FraudPattern;
use crate::regulation::Regulation;
use crate::sanctions::{SanctionsEntry, SanctionsListType};

/// Catalog backed by in-memory collections.
///
/// Iteration order is insertion order for sanctions entries, which makes
/// the screener's documented "first in catalog iteration order"
/// tie-break stable and reproducible.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    regulations: BTreeMap<String, Regulation>,
    sanctions: Vec<SanctionsEntry>,
    patterns: Vec<FraudPattern>,
    schemas: BTreeMap<String, DocumentSchema>,
}

impl InMemoryCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-seeded with the built-in document schemas.
    pub fn with_builtin_document_schemas() -> Self {
        let mut catalog = Self::new();
        for schema in DocumentSchema::builtin() {
            catalog.add_document_schema(schema);
        }
        catalog
    }

    /// Insert or replace a regulation (keyed by lowercased code).
    pub fn add_regulation(&mut self, regulation: Regulation) {
        self.regulations
            .insert(regulation.code.to_lowercase(), regulation);
    }

    /// Append a sanctions entry.
    pub fn add_sanctions_entry(&mut self, entry: SanctionsEntry) {
        self.sanctions.push(entry);
    }

    /// Append a fraud pattern.
    pub fn add_fraud_pattern(&mut self, pattern: FraudPattern) {
        self.patterns.push(pattern);
    }

    /// Insert or replace a document schema (keyed by lowercased type).
    pub fn add_document_schema(&mut self, schema: DocumentSchema) {
        self.schemas
            .insert(schema.doc_type.to_lowercase(), schema);
    }
}

/// Case-insensitive country comparison for the pre-filter.
fn country_matches(entry_country: Option<&str>, filter: &str) -> bool {
    match entry_country {
        // No association recorded — conservatively keep the entry.
        None => true,
        Some(country) => country.eq_ignore_ascii_case(filter),
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn find_regulation(&self, code: &str) -> Result<Option<Regulation>, CatalogError> {
        Ok(self
            .regulations
            .get(&code.to_lowercase())
            .filter(|r| r.is_active)
            .cloned())
    }

    async fn list_sanctions_entries(
        &self,
        list_type: SanctionsListType,
        country: Option<&str>,
    ) -> Result<Vec<SanctionsEntry>, CatalogError> {
        Ok(self
            .sanctions
            .iter()
            .filter(|e| e.list_type == list_type)
            .filter(|e| match country {
                Some(filter) => country_matches(e.country.as_deref(), filter),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn list_active_fraud_patterns(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FraudPattern>, CatalogError> {
        Ok(self
            .patterns
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| match category {
                Some(wanted) => p.category.eq_ignore_ascii_case(wanted),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_document_schema(
        &self,
        doc_type: &str,
    ) -> Result<Option<DocumentSchema>, CatalogError> {
        Ok(self.schemas.get(&doc_type.to_lowercase()).cloned())
    }
}
