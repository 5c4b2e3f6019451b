//! # Verification Requests
//!
//! The input boundary of the engine. A request names the entity, the
//! categories to evaluate, and any category-specific auxiliary data
//! (regulation codes, watchlist selection, financial claims, a document
//! to inspect). Validation happens once, up front, in [`VerificationRequest::validate`];
//! evaluators may assume a validated request.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vet_catalog::SanctionsListType;
use vet_core::{AttributeMap, CheckCategory, Entity};

use crate::error::EngineError;

/// Filesystem-level metadata of a submitted document, used for
/// tamper-evidence checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// When the document was created, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the document was last modified, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

/// An identity document submitted for forensic inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    /// Schema key, e.g. `"passport"` or `"national_id"`.
    pub doc_type: String,
    /// Extracted field values keyed by schema field name.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    /// Optional file metadata for consistency checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl DocumentInput {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            fields: BTreeMap::new(),
            metadata: None,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Self-reported financial standing, evaluated by declarative rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialClaims {
    /// Credit score, if the entity has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<u16>,
    /// Whether a bankruptcy proceeding is currently open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bankruptcy: Option<bool>,
    /// Count of active liens against the entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_liens: Option<u32>,
}

/// One entity, the categories to check, and the auxiliary data those
/// categories need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// The entity under verification.
    pub entity: Entity,
    /// Categories to evaluate. Must be non-empty.
    pub categories: BTreeSet<CheckCategory>,
    /// Regulations to check coverage against (compliance category).
    #[serde(default)]
    pub regulation_codes: Vec<String>,
    /// Watchlists to screen (sanctions category). Empty means all lists.
    #[serde(default)]
    pub list_types: Vec<SanctionsListType>,
    /// Field names the caller has supplied evidence for, with values.
    /// Compliance coverage is computed against the key set.
    #[serde(default)]
    pub supplied_fields: BTreeMap<String, serde_json::Value>,
    /// Financial claims (financial category).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_claims: Option<FinancialClaims>,
    /// Document to inspect (document-forgery category).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentInput>,
}

impl VerificationRequest {
    /// Request for one entity with no categories selected yet.
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            categories: BTreeSet::new(),
            regulation_codes: Vec::new(),
            list_types: Vec::new(),
            supplied_fields: BTreeMap::new(),
            financial_claims: None,
            document: None,
        }
    }

    pub fn with_category(mut self, category: CheckCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CheckCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_regulation(mut self, code: impl Into<String>) -> Self {
        self.regulation_codes.push(code.into());
        self
    }

    pub fn with_list_type(mut self, list_type: SanctionsListType) -> Self {
        self.list_types.push(list_type);
        self
    }

    pub fn with_supplied_field(
        mut self,
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.supplied_fields.insert(name.into(), value);
        self
    }

    pub fn with_financial_claims(mut self, claims: FinancialClaims) -> Self {
        self.financial_claims = Some(claims);
        self
    }

    pub fn with_document(mut self, document: DocumentInput) -> Self {
        self.document = Some(document);
        self
    }

    /// Attach free-form attributes to the entity, logging any keys that
    /// do not map to a known [`vet_core::AttributeKey`].
    pub fn with_raw_attributes(mut self, raw: BTreeMap<String, serde_json::Value>) -> Self {
        let (attributes, ignored) = AttributeMap::from_raw(raw);
        for key in &ignored {
            tracing::debug!(key, "ignoring unknown entity attribute");
        }
        self.entity.attributes = attributes;
        self
    }

    /// Watchlists to screen, defaulting to all known lists when the
    /// caller named none.
    pub fn effective_list_types(&self) -> Vec<SanctionsListType> {
        if self.list_types.is_empty() {
            SanctionsListType::all().to_vec()
        } else {
            self.list_types.clone()
        }
    }

    /// Reject structurally unusable requests before any evaluator runs.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.categories.is_empty() {
            return Err(EngineError::InvalidInput(
                "at least one check category must be requested".into(),
            ));
        }
        if self.entity.name.trim().is_empty() {
            return Err(EngineError::InvalidInput("entity name is blank".into()));
        }
        if self.categories.contains(&CheckCategory::Compliance) && self.regulation_codes.is_empty()
        {
            return Err(EngineError::InvalidInput(
                "compliance check requested without regulation codes".into(),
            ));
        }
        if self.categories.contains(&CheckCategory::Financial) && self.financial_claims.is_none() {
            return Err(EngineError::InvalidInput(
                "financial check requested without financial claims".into(),
            ));
        }
        if self.categories.contains(&CheckCategory::DocumentForgery) {
            match &self.document {
                None => {
                    return Err(EngineError::InvalidInput(
                        "document-forgery check requested without a document".into(),
                    ));
                }
                Some(doc) if doc.doc_type.trim().is_empty() => {
                    return Err(EngineError::InvalidInput(
                        "document has an empty doc_type".into(),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
