//! # Check Categories
//!
//! The five verification categories a request may ask for. The enum is
//! closed and ordered: serialized output and the composite rationale
//! always list categories in declaration order, so audit trails are
//! stable across runs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A verification category that can be requested for an entity.
///
/// Declaration order is the canonical category order used in composite
/// decisions and rationale output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CheckCategory {
    /// Regulation requirement coverage (mandatory field presence).
    Compliance,
    /// Sanctions / watchlist screening.
    Sanctions,
    /// Financial health rules (credit, bankruptcy, liens).
    Financial,
    /// Fraud indicator pattern matching.
    Fraud,
    /// Document structural/metadata forensics.
    DocumentForgery,
}

impl CheckCategory {
    /// All categories, in canonical order.
    pub fn all() -> [CheckCategory; 5] {
        [
            Self::Compliance,
            Self::Sanctions,
            Self::Financial,
            Self::Fraud,
            Self::DocumentForgery,
        ]
    }

    /// Stable string form (kebab-case, matching the wire contract).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliance => "compliance",
            Self::Sanctions => "sanctions",
            Self::Financial => "financial",
            Self::Fraud => "fraud",
            Self::DocumentForgery => "document-forgery",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compliance" => Ok(Self::Compliance),
            "sanctions" => Ok(Self::Sanctions),
            "financial" => Ok(Self::Financial),
            "fraud" => Ok(Self::Fraud),
            "document-forgery" => Ok(Self::DocumentForgery),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}
