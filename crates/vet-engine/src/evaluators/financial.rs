//! # Financial Rules Evaluator
//!
//! Applies the built-in declarative rules to the caller's financial
//! claims: sub-floor credit score, active bankruptcy, and active liens
//! each add a configured delta. Purely local — no catalog access and
//! nothing async about it.
//!
//! A claim that was not made (field absent) contributes nothing, in
//! either direction. All three absent is `clear` with score 0: the
//! caller asserted financial standing and no rule contradicted it.

use serde_json::json;

use vet_core::{CheckCategory, VerificationStatus};

use crate::config::EngineConfig;
use crate::outcome::VerificationOutcome;
use crate::request::FinancialClaims;

pub fn evaluate(claims: &FinancialClaims, config: &EngineConfig) -> VerificationOutcome {
    let mut total: u32 = 0;
    let mut rationale: Vec<String> = Vec::new();

    if let Some(credit_score) = claims.credit_score {
        if credit_score < config.credit_score_floor {
            total += u32::from(config.credit_delta);
            rationale.push(format!(
                "credit score {credit_score} below floor {}",
                config.credit_score_floor
            ));
        }
    }
    if claims.active_bankruptcy == Some(true) {
        total += u32::from(config.bankruptcy_delta);
        rationale.push("active bankruptcy proceeding".to_string());
    }
    if let Some(liens) = claims.active_liens {
        if liens > 0 {
            total += u32::from(config.lien_delta);
            rationale.push(format!("{liens} active lien(s)"));
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

    let mut outcome = VerificationOutcome::new(CheckCategory::Financial, status, score);
    if rationale.is_empty() {
        outcome.push_rationale("no financial rule matched");
    }
    for line in rationale {
        outcome.push_rationale(line);
    }
    outcome.record_signal("claims", json!(claims));
    outcome
}
