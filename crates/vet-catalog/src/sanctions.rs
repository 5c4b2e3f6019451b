//! # Sanctions & Watchlist Entries
//!
//! Entries from consolidated sanctions and watchlists (OFAC SDN, EU, UN,
//! PEP, UK HMT). Each entry carries the primary name, known aliases, and
//! official identifiers — the fuzzy matcher scores against all of them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use vet_core::{EntityKind, IdentifierKind};

/// The watchlist a sanctions entry belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SanctionsListType {
    OfacSdn,
    EuConsolidated,
    UnConsolidated,
    UkHmt,
    Pep,
}

impl SanctionsListType {
    /// All list types, in canonical order.
    pub fn all() -> &'static [SanctionsListType] {
        &[
            Self::OfacSdn,
            Self::EuConsolidated,
            Self::UnConsolidated,
            Self::UkHmt,
            Self::Pep,
        ]
    }

    /// Stable snake_case string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OfacSdn => "ofac_sdn",
            Self::EuConsolidated => "eu_consolidated",
            Self::UnConsolidated => "un_consolidated",
            Self::UkHmt => "uk_hmt",
            Self::Pep => "pep",
        }
    }
}

impl fmt::Display for SanctionsListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanctionsListType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown sanctions list type: '{s}'"))
    }
}

/// A single watchlist entry. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanctionsEntry {
    /// Unique entry identifier within the catalog.
    pub entry_id: String,
    /// The list this entry appears on.
    pub list_type: SanctionsListType,
    /// Primary listed name.
    pub name: String,
    /// Known aliases (AKA names, transliterations).
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Individual or organization.
    pub entity_kind: EntityKind,
    /// Country association, when known. Entries without a country are
    /// never excluded by country pre-filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Official identifiers by kind.
    #[serde(default)]
    pub identifiers: BTreeMap<IdentifierKind, String>,
    /// Sanctions programs the entry is listed under.
    #[serde(default)]
    pub programs: Vec<String>,
    /// Date first listed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_date: Option<NaiveDate>,
}

impl SanctionsEntry {
    /// Minimal entry for the given list.
    pub fn new(
        entry_id: impl Into<String>,
        list_type: SanctionsListType,
        name: impl Into<String>,
        entity_kind: EntityKind,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            list_type,
            name: name.into(),
            aliases: Vec::new(),
            entity_kind,
            country: None,
            identifiers: BTreeMap::new(),
            programs: Vec::new(),
            listing_date: None,
        }
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the country association.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Add an official identifier.
    pub fn with_identifier(mut self, kind: IdentifierKind, value: impl Into<String>) -> Self {
        self.identifiers.insert(kind, value.into());
        self
    }
}
