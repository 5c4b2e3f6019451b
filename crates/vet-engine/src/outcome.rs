//! # Verification Outcomes & Composite Decision
//!
//! Per-category outcomes carry a status, a 0-100 score, an ordered
//! human-readable rationale, and a `raw_signals` map preserving
//! sub-check detail for audit. The composite decision merges one
//! outcome per requested category. All of it is ephemeral: produced and
//! consumed within a single request.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use vet_core::{CheckCategory, VerificationStatus};

/// Reason code for a category degraded by catalog unavailability.
pub const REASON_CATALOG_UNAVAILABLE: &str = "catalog_unavailable";
/// Reason code for a category degraded by deadline expiry.
pub const REASON_CATALOG_TIMEOUT: &str = "catalog_timeout";
/// Reason code for a category whose reference data does not exist.
pub const REASON_NO_APPLICABLE_RULE: &str = "no_applicable_rule";
/// Reason code for a category whose evaluator task did not complete.
pub const REASON_EVALUATOR_FAILED: &str = "evaluator_failed";

/// Score assigned to degraded outcomes: inside the review band, so
/// missing data can never read as confidence in either direction.
const DEGRADED_SCORE: u8 = 50;

/// The result of one sub-evaluator for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationOutcome {
    /// The category this outcome belongs to.
    pub category: CheckCategory,
    /// Clear, review, or hit.
    pub status: VerificationStatus,
    /// Category-specific 0-100 score (see each evaluator for semantics).
    pub score: u8,
    /// Ordered human-readable reasons.
    pub rationale: Vec<String>,
    /// Per-sub-check detail preserved for the audit trail.
    pub raw_signals: BTreeMap<String, serde_json::Value>,
}

impl VerificationOutcome {
    /// Outcome with empty rationale and signals.
    pub fn new(category: CheckCategory, status: VerificationStatus, score: u8) -> Self {
        Self {
            category,
            status,
            score,
            rationale: Vec::new(),
            raw_signals: BTreeMap::new(),
        }
    }

    /// Append a rationale line.
    pub fn push_rationale(&mut self, line: impl Into<String>) {
        self.rationale.push(line.into());
    }

    /// Record a raw signal for audit.
    pub fn record_signal(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.raw_signals.insert(key.into(), value);
    }

    /// Build a degraded `review` outcome for a category whose evaluation
    /// could not complete. Carries the reason code in `raw_signals` and
    /// a "data unavailable" rationale; the status is `review` because
    /// absent data must not read as `clear`.
    pub fn degraded(category: CheckCategory, reason_code: &str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let mut outcome = Self::new(category, VerificationStatus::Review, DEGRADED_SCORE);
        outcome.push_rationale(format!("data unavailable: {detail}"));
        outcome.record_signal("reason_code", serde_json::Value::String(reason_code.into()));
        outcome.record_signal("detail", serde_json::Value::String(detail));
        outcome
    }
}

/// Coarse risk band derived from the composite score and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band for a given overall status and composite score.
    pub fn from_status(status: VerificationStatus, composite_score: u8) -> Self {
        match status {
            VerificationStatus::Hit => Self::Critical,
            VerificationStatus::Review => {
                if composite_score >= 60 {
                    Self::High
                } else {
                    Self::Medium
                }
            }
            VerificationStatus::Clear => Self::Low,
        }
    }
}

/// The merged decision across all requested categories.
#[derive(Debug, Clone, Serialize)]
pub struct CompositeDecision {
    /// Unique decision identifier for the audit trail.
    pub decision_id: Uuid,
    /// When the decision was produced.
    pub evaluated_at: DateTime<Utc>,
    /// One outcome per requested category, in canonical category order.
    pub outcomes: Vec<VerificationOutcome>,
    /// Weighted composite score over the requested categories.
    pub composite_score: u8,
    /// Never weaker than the strongest individual category status.
    pub overall_status: VerificationStatus,
    /// Coarse band derived from status and composite score.
    pub risk_level: RiskLevel,
    /// Outcomes that drove the final status, in category order.
    pub generated_rationale: Vec<String>,
}

impl CompositeDecision {
    /// Find the outcome for a category, if it was requested.
    pub fn outcome(&self, category: CheckCategory) -> Option<&VerificationOutcome> {
        self.outcomes.iter().find(|o| o.category == category)
    }
}
