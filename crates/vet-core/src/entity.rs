//! # Entity Under Verification
//!
//! The immutable description of the person or organization being
//! verified. Constructed fresh from each incoming request and alive only
//! for that call — the engine never persists entities.
//!
//! Identifier kinds are a closed enum so that identifier comparison
//! (which is authoritative over fuzzy name similarity) can never be
//! confused by free-form key spelling.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;
use crate::error::ValidationError;

/// Whether the entity is a natural person or an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Individual,
    Organization,
}

impl EntityKind {
    /// Stable string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(Self::Individual),
            "organization" => Ok(Self::Organization),
            other => Err(ValidationError::UnknownEntityKind(other.to_string())),
        }
    }
}

/// A recognized kind of official identifier.
///
/// Shared identifier values of the same kind are compared exactly (after
/// normalization) and dominate fuzzy name similarity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    TaxId,
    Passport,
    NationalId,
    RegistrationNumber,
    DriverLicense,
    Lei,
}

impl IdentifierKind {
    /// All identifier kinds.
    pub fn all() -> &'static [IdentifierKind] {
        &[
            Self::TaxId,
            Self::Passport,
            Self::NationalId,
            Self::RegistrationNumber,
            Self::DriverLicense,
            Self::Lei,
        ]
    }

    /// Stable snake_case string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaxId => "tax_id",
            Self::Passport => "passport",
            Self::NationalId => "national_id",
            Self::RegistrationNumber => "registration_number",
            Self::DriverLicense => "driver_license",
            Self::Lei => "lei",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownIdentifierKind(s.to_string()))
    }
}

/// The entity being verified.
///
/// Immutable for the duration of one verification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Full name as supplied by the caller.
    pub name: String,
    /// Individual or organization.
    pub kind: EntityKind,
    /// ISO country code or free text, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Official identifiers by kind.
    #[serde(default)]
    pub identifiers: BTreeMap<IdentifierKind, String>,
    /// Supplementary attributes (typed, unrecognized keys already dropped).
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl Entity {
    /// Create an entity with a non-empty name.
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyEntityName);
        }
        Ok(Self {
            name,
            kind,
            country: None,
            identifiers: BTreeMap::new(),
            attributes: AttributeMap::new(),
        })
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Add an identifier. Empty values are rejected.
    pub fn with_identifier(
        mut self,
        kind: IdentifierKind,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier {
                kind: kind.as_str().to_string(),
            });
        }
        self.identifiers.insert(kind, value);
        Ok(self)
    }

    /// Replace the attribute map.
    pub fn with_attributes(mut self, attributes: AttributeMap) -> Self {
        self.attributes = attributes;
        self
    }
}
