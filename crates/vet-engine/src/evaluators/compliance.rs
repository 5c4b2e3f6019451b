//! # Compliance Evaluator
//!
//! Checks the caller-supplied field set against each requested
//! regulation's mandatory requirements. The score measures coverage:
//! `100 - round(100 * missing / mandatory_total)`, so full coverage is
//! 100 and an empty submission is 0.
//!
//! Status per regulation:
//!
//! - no missing mandatory fields → `clear`
//! - exactly one missing → `review`
//! - two or more missing, or any missing identity-critical field → `hit`
//!
//! Multiple regulations merge pessimistically: the worst status wins and
//! the score is the mean of the per-regulation scores. Per-regulation
//! detail stays in `raw_signals` for the audit trail.

use serde_json::json;

use vet_catalog::{Catalog, CatalogError, Regulation};
use vet_core::{CheckCategory, VerificationStatus};

use crate::outcome::{VerificationOutcome, REASON_NO_APPLICABLE_RULE};
use crate::request::VerificationRequest;

/// Coverage result for a single regulation.
struct RegulationResult {
    code: String,
    status: VerificationStatus,
    score: u8,
    missing: Vec<String>,
}

pub async fn evaluate(
    catalog: &dyn Catalog,
    request: &VerificationRequest,
) -> Result<VerificationOutcome, CatalogError> {
    let mut results: Vec<RegulationResult> = Vec::new();
    let mut unknown_codes: Vec<String> = Vec::new();

    for code in &request.regulation_codes {
        match catalog.find_regulation(code).await? {
            Some(regulation) => results.push(check_regulation(&regulation, request)),
            None => unknown_codes.push(code.clone()),
        }
    }

    if results.is_empty() {
        let mut outcome = VerificationOutcome::degraded(
            CheckCategory::Compliance,
            REASON_NO_APPLICABLE_RULE,
            format!("no known regulation among: {}", unknown_codes.join(", ")),
        );
        outcome.record_signal("unknown_codes", json!(unknown_codes));
        return Ok(outcome);
    }

    let status = results
        .iter()
        .map(|r| r.status)
        .fold(VerificationStatus::Clear, VerificationStatus::escalate);
    let score =
        (results.iter().map(|r| u32::from(r.score)).sum::<u32>() / results.len() as u32) as u8;

    let mut outcome = VerificationOutcome::new(CheckCategory::Compliance, status, score);
    for result in &results {
        if result.missing.is_empty() {
            outcome.push_rationale(format!("{}: all mandatory fields supplied", result.code));
        } else {
            outcome.push_rationale(format!(
                "{}: missing mandatory fields: {}",
                result.code,
                result.missing.join(", ")
            ));
        }
        outcome.record_signal(
            format!("regulation:{}", result.code),
            json!({
                "status": result.status,
                "score": result.score,
                "missing_fields": result.missing,
            }),
        );
    }
    if !unknown_codes.is_empty() {
        outcome.push_rationale(format!("unknown regulations: {}", unknown_codes.join(", ")));
        outcome.record_signal("unknown_codes", json!(unknown_codes));
    }
    let recommendations: Vec<String> = results
        .iter()
        .flat_map(|r| r.missing.iter().map(|f| format!("supply '{f}' for {}", r.code)))
        .collect();
    for recommendation in &recommendations {
        outcome.push_rationale(format!("recommendation: {recommendation}"));
    }
    outcome.record_signal("recommendations", json!(recommendations));
    outcome.record_signal(
        "regulations_checked",
        json!(results.iter().map(|r| r.code.as_str()).collect::<Vec<_>>()),
    );
    Ok(outcome)
}

fn check_regulation(regulation: &Regulation, request: &VerificationRequest) -> RegulationResult {
    let mandatory: Vec<&str> = regulation.mandatory_fields().collect();
    let missing: Vec<String> = mandatory
        .iter()
        .filter(|field| !field_supplied(request.supplied_fields.get(**field)))
        .map(|field| field.to_string())
        .collect();

    let score = if mandatory.is_empty() {
        100
    } else {
        let ratio = missing.len() as f64 / mandatory.len() as f64;
        100 - (ratio * 100.0).round() as u8
    };

    let identity_critical_missing = missing
        .iter()
        .any(|field| regulation.is_identity_critical(field));
    let status = if identity_critical_missing || missing.len() >= 2 {
        VerificationStatus::Hit
    } else if missing.len() == 1 {
        VerificationStatus::Review
    } else {
        VerificationStatus::Clear
    };

    RegulationResult {
        code: regulation.code.clone(),
        status,
        score,
        missing,
    }
}

/// A mandatory field counts only when its value carries content: null,
/// an absent key, and blank strings are all missing.
fn field_supplied(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}
