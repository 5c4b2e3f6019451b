//! # Risk Aggregation
//!
//! Merges per-category outcomes into one composite decision.
//!
//! ```text
//! composite = round( Σ weight(c) · score(c) / Σ weight(c) )
//! ```
//!
//! The weights are renormalized over the categories actually evaluated,
//! so a two-category request is not diluted by the weights of categories
//! nobody asked for. Averaging never decides the status on its own: a
//! single `hit` outcome forces the overall status to `hit` regardless of
//! how low the composite lands (the hit-override rule), and any `review`
//! outcome or a composite at/above the review threshold yields `review`.

use chrono::Utc;
use uuid::Uuid;

use vet_core::{CheckCategory, VerificationStatus};

use crate::config::EngineConfig;
use crate::outcome::{CompositeDecision, RiskLevel, VerificationOutcome};

/// Relative weight of each category in the composite score.
fn weight(category: CheckCategory) -> f64 {
    match category {
        CheckCategory::Sanctions => 0.35,
        CheckCategory::Fraud => 0.25,
        CheckCategory::Financial => 0.20,
        CheckCategory::Compliance => 0.10,
        CheckCategory::DocumentForgery => 0.10,
    }
}

/// Merge category outcomes into a composite decision.
///
/// Outcomes are emitted in canonical category order regardless of the
/// order evaluation finished in.
pub fn aggregate(mut outcomes: Vec<VerificationOutcome>, config: &EngineConfig) -> CompositeDecision {
    outcomes.sort_by_key(|o| o.category);

    let total_weight: f64 = outcomes.iter().map(|o| weight(o.category)).sum();
    let composite_score = if total_weight > 0.0 {
        let weighted: f64 = outcomes
            .iter()
            .map(|o| weight(o.category) * f64::from(o.score))
            .sum();
        (weighted / total_weight).round() as u8
    } else {
        0
    };

    let worst = outcomes
        .iter()
        .map(|o| o.status)
        .fold(VerificationStatus::Clear, VerificationStatus::escalate);
    let overall_status = match worst {
        VerificationStatus::Hit => VerificationStatus::Hit,
        VerificationStatus::Review => VerificationStatus::Review,
        VerificationStatus::Clear => {
            if composite_score >= config.review_score_threshold {
                VerificationStatus::Review
            } else {
                VerificationStatus::Clear
            }
        }
    };

    let generated_rationale = outcomes
        .iter()
        .filter(|o| !o.status.is_clear())
        .map(summary_line)
        .collect::<Vec<_>>();
    let generated_rationale = if generated_rationale.is_empty() {
        vec!["all requested checks clear".to_string()]
    } else {
        generated_rationale
    };

    CompositeDecision {
        decision_id: Uuid::new_v4(),
        evaluated_at: Utc::now(),
        outcomes,
        composite_score,
        overall_status,
        risk_level: RiskLevel::from_status(overall_status, composite_score),
        generated_rationale,
    }
}

fn summary_line(outcome: &VerificationOutcome) -> String {
    let lead = outcome
        .rationale
        .first()
        .map(String::as_str)
        .unwrap_or("no detail recorded");
    format!(
        "{} {} (score {}): {lead}",
        outcome.category, outcome.status, outcome.score
    )
}
