//! # Regulations & Requirements
//!
//! A regulation declares which supplied fields are mandatory for an
//! entity to be considered compliant, plus the subset of fields that are
//! identity-critical — missing one of those escalates straight to `hit`.

use serde::{Deserialize, Serialize};

/// A single field requirement belonging to a regulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationRequirement {
    /// The supplied-field key this requirement checks.
    pub field_name: String,
    /// Whether absence of the field counts against the entity.
    pub is_mandatory: bool,
}

impl RegulationRequirement {
    /// Mandatory requirement for `field_name`.
    pub fn mandatory(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_mandatory: true,
        }
    }

    /// Optional requirement for `field_name`.
    pub fn optional(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_mandatory: false,
        }
    }
}

/// A regulation with its declared requirements. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    /// Short code, e.g. "gdpr", "kyc", "sox". Compared case-insensitively.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Jurisdiction the regulation applies in, when scoped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    /// Declared field requirements.
    pub requirements: Vec<RegulationRequirement>,
    /// Fields whose absence is a `hit` on its own, regardless of how many
    /// other mandatory fields are present.
    #[serde(default)]
    pub identity_critical_fields: Vec<String>,
    /// Inactive regulations are never evaluated.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Regulation {
    /// Iterate the mandatory requirement field names.
    pub fn mandatory_fields(&self) -> impl Iterator<Item = &str> {
        self.requirements
            .iter()
            .filter(|r| r.is_mandatory)
            .map(|r| r.field_name.as_str())
    }

    /// Whether a field is identity-critical for this regulation.
    pub fn is_identity_critical(&self, field: &str) -> bool {
        self.identity_critical_fields.iter().any(|f| f == field)
    }
}
