//! # Fraud Indicator Patterns
//!
//! Fraud detection rules are **data, not code**: each pattern is an
//! ordered list of indicators, and each indicator pairs a recognized
//! attribute key with a tagged [`IndicatorCondition`]. A small closed
//! interpreter ([`IndicatorCondition::matches`]) evaluates conditions —
//! there is no scripting surface, so every rule is auditable.
//!
//! Absence of an attribute is never a hit. The evaluator only invokes
//! the interpreter when the field was actually supplied.

use serde::{Deserialize, Serialize};

use vet_core::AttributeKey;

/// A tagged condition descriptor over a supplied attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum IndicatorCondition {
    /// Value equals the expected JSON value.
    Equals(serde_json::Value),
    /// Value differs from the given JSON value.
    NotEquals(serde_json::Value),
    /// String value contains the given substring (case-insensitive).
    Contains(String),
    /// Numeric value strictly greater than the bound.
    GreaterThan(f64),
    /// Numeric value strictly less than the bound.
    LessThan(f64),
    /// Value is one of the listed JSON values.
    OneOf(Vec<serde_json::Value>),
    /// Field is present with a non-null, non-empty value.
    Present,
}

impl IndicatorCondition {
    /// Evaluate the condition against a supplied value.
    ///
    /// Type mismatches (e.g. `GreaterThan` against a string) evaluate to
    /// `false` — a malformed comparison must not manufacture a fraud
    /// signal.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            Self::Equals(expected) => value == expected,
            Self::NotEquals(expected) => value != expected,
            Self::Contains(needle) => value
                .as_str()
                .map(|s| s.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            Self::GreaterThan(bound) => value.as_f64().map(|v| v > *bound).unwrap_or(false),
            Self::LessThan(bound) => value.as_f64().map(|v| v < *bound).unwrap_or(false),
            Self::OneOf(values) => values.iter().any(|v| v == value),
            Self::Present => match value {
                serde_json::Value::Null => false,
                serde_json::Value::String(s) => !s.trim().is_empty(),
                _ => true,
            },
        }
    }
}

/// One indicator inside a fraud pattern: a field plus its condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// The attribute the condition applies to.
    pub field: AttributeKey,
    /// The condition descriptor.
    pub condition: IndicatorCondition,
}

impl Indicator {
    /// Convenience constructor.
    pub fn new(field: AttributeKey, condition: IndicatorCondition) -> Self {
        Self { field, condition }
    }
}

/// A fraud pattern: an indicator set with a trigger threshold and a
/// bounded risk contribution. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudPattern {
    /// Unique pattern identifier within the catalog.
    pub pattern_id: String,
    /// Human-readable name, used in rationale output.
    pub name: String,
    /// Pattern category, e.g. "identity_theft", "synthetic_identity".
    pub category: String,
    /// Ordered indicator descriptors.
    pub indicators: Vec<Indicator>,
    /// Minimum indicator hits for the pattern to trigger. When absent,
    /// a majority of the indicators is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_indicator_hits: Option<usize>,
    /// Maximum risk contribution of this pattern (0-100).
    pub risk_score: u8,
    /// Inactive patterns are never evaluated.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl FraudPattern {
    /// The hit count required for this pattern to trigger.
    ///
    /// Defaults to a strict majority of the indicator count when no
    /// explicit minimum is configured. A pattern with no indicators can
    /// never trigger.
    pub fn required_hits(&self) -> usize {
        match self.min_indicator_hits {
            Some(min) => min.max(1),
            None => self.indicators.len() / 2 + 1,
        }
    }

    /// Risk contribution clamped to the 0-100 scale.
    pub fn capped_risk_score(&self) -> u8 {
        self.risk_score.min(100)
    }
}
