//! # Fraud Pattern Evaluator
//!
//! Runs the active fraud patterns against the entity's supplied
//! attributes. An indicator only counts when its attribute was actually
//! supplied and its condition matches; a pattern triggers when enough of
//! its indicators count. The score is the sum of the triggered patterns'
//! capped risk contributions, clamped to 100, banded into
//! clear / review / hit by the configured thresholds.

use serde_json::json;

use vet_catalog::{Catalog, CatalogError, FraudPattern};
use vet_core::{AttributeMap, CheckCategory, VerificationStatus};

use crate::config::EngineConfig;
use crate::outcome::{VerificationOutcome, REASON_NO_APPLICABLE_RULE};
use crate::request::VerificationRequest;

pub async fn evaluate(
    catalog: &dyn Catalog,
    request: &VerificationRequest,
    config: &EngineConfig,
) -> Result<VerificationOutcome, CatalogError> {
    let patterns = catalog.list_active_fraud_patterns(None).await?;
    if patterns.is_empty() {
        return Ok(VerificationOutcome::degraded(
            CheckCategory::Fraud,
            REASON_NO_APPLICABLE_RULE,
            "no active fraud patterns in the catalog",
        ));
    }

    let attributes = &request.entity.attributes;
    let mut total: u32 = 0;
    let mut triggered: Vec<(&FraudPattern, Vec<&'static str>)> = Vec::new();
    for pattern in &patterns {
        let hits = hit_indicators(pattern, attributes);
        if hits.len() >= pattern.required_hits() && !pattern.indicators.is_empty() {
            total += u32::from(pattern.capped_risk_score());
            triggered.push((pattern, hits));
        }
    }
    let score = total.min(100) as u8;

    let status = if score >= config.fraud_hit_threshold {
        VerificationStatus::Hit
    } else if score >= config.review_score_threshold {
        VerificationStatus::Review
    } else {
        VerificationStatus::Clear
    };

    let mut outcome = VerificationOutcome::new(CheckCategory::Fraud, status, score);
    if triggered.is_empty() {
        outcome.push_rationale(format!("no pattern triggered ({} evaluated)", patterns.len()));
    }
    for (pattern, hits) in &triggered {
        outcome.push_rationale(format!(
            "{} ({}) triggered with {}/{} indicators: {}",
            pattern.name,
            pattern.pattern_id,
            hits.len(),
            pattern.indicators.len(),
            hits.join(", ")
        ));
        outcome.record_signal(
            format!("pattern:{}", pattern.pattern_id),
            json!({
                "category": pattern.category,
                "hit_indicators": hits,
                "risk_contribution": pattern.capped_risk_score(),
            }),
        );
    }
    outcome.record_signal("patterns_evaluated", json!(patterns.len()));
    Ok(outcome)
}

/// Fields of the indicators whose attribute is supplied and condition
/// matches. Absent attributes never count toward a pattern.
fn hit_indicators(pattern: &FraudPattern, attributes: &AttributeMap) -> Vec<&'static str> {
    pattern
        .indicators
        .iter()
        .filter(|indicator| {
            attributes
                .get(indicator.field)
                .map(|value| indicator.condition.matches(value))
                .unwrap_or(false)
        })
        .map(|indicator| indicator.field.as_str())
        .collect()
}
