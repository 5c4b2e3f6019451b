//! # Document Forensics Evaluator
//!
//! Structural consistency checks on an already-extracted document
//! against its schema. Anomalies:
//!
//! - a required schema field is missing or blank
//! - a present field fails its declared format
//! - `issue_date` is after `expiry_date`
//! - file metadata reports modification before creation
//!
//! Status by anomaly count: 0 → `clear`, 1 → `review`, 2+ → `hit`.
//! Score is the anomaly count times the configured delta, clamped to
//! 100. An unknown document type is `review` / `no_applicable_rule`.

use chrono::NaiveDate;
use serde_json::json;

use vet_catalog::{Catalog, CatalogError, DocumentSchema};
use vet_core::{CheckCategory, VerificationStatus};

use crate::config::EngineConfig;
use crate::outcome::{VerificationOutcome, REASON_NO_APPLICABLE_RULE};
use crate::request::DocumentInput;

pub async fn evaluate(
    catalog: &dyn Catalog,
    document: &DocumentInput,
    config: &EngineConfig,
) -> Result<VerificationOutcome, CatalogError> {
    let schema = match catalog.find_document_schema(&document.doc_type).await? {
        Some(schema) => schema,
        None => {
            return Ok(VerificationOutcome::degraded(
                CheckCategory::DocumentForgery,
                REASON_NO_APPLICABLE_RULE,
                format!("no schema for document type '{}'", document.doc_type),
            ));
        }
    };

    let anomalies = collect_anomalies(&schema, document);
    let count = anomalies.len();
    let status = match count {
        0 => VerificationStatus::Clear,
        1 => VerificationStatus::Review,
        _ => VerificationStatus::Hit,
    };
    let score = (count as u32 * u32::from(config.document_anomaly_delta)).min(100) as u8;

    let mut outcome = VerificationOutcome::new(CheckCategory::DocumentForgery, status, score);
    if anomalies.is_empty() {
        outcome.push_rationale(format!(
            "document structure consistent with '{}' schema",
            schema.doc_type
        ));
    }
    for anomaly in &anomalies {
        outcome.push_rationale(anomaly.clone());
    }
    outcome.record_signal("anomaly_count", json!(count));
    outcome.record_signal("anomalies", json!(anomalies));
    Ok(outcome)
}

fn collect_anomalies(schema: &DocumentSchema, document: &DocumentInput) -> Vec<String> {
    let mut anomalies = Vec::new();

    for field in &schema.fields {
        let value = document
            .fields
            .get(&field.name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty());
        match value {
            None => {
                if field.required {
                    anomalies.push(format!("required field '{}' is missing", field.name));
                }
            }
            Some(value) => {
                if let Some(format) = field.format {
                    if !format.is_valid(value) {
                        anomalies.push(format!(
                            "field '{}' does not match format {format}: '{value}'",
                            field.name
                        ));
                    }
                }
            }
        }
    }

    // Cross-field check: a document issued after its own expiry.
    if let (Some(issue), Some(expiry)) = (
        parse_date(document, "issue_date"),
        parse_date(document, "expiry_date"),
    ) {
        if issue > expiry {
            anomalies.push(format!("issue_date {issue} is after expiry_date {expiry}"));
        }
    }

    if let Some(metadata) = &document.metadata {
        if let (Some(created), Some(modified)) = (metadata.created, metadata.modified) {
            if modified < created {
                anomalies.push(format!(
                    "file modified at {modified} before creation at {created}"
                ));
            }
        }
    }

    anomalies
}

fn parse_date(document: &DocumentInput, name: &str) -> Option<NaiveDate> {
    document
        .fields
        .get(name)
        .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use vet_catalog::InMemoryCatalog;

    use crate::request::DocumentMetadata;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::with_builtin_document_schemas()
    }

    fn clean_passport() -> DocumentInput {
        DocumentInput::new("passport")
            .with_field("document_number", "X1234567")
            .with_field("full_name", "JANE ROE")
            .with_field("issue_date", "2019-03-14")
            .with_field("expiry_date", "2029-03-13")
            .with_field("issuing_country", "GBR")
    }

    #[tokio::test]
    async fn consistent_document_is_clear() {
        let outcome = evaluate(&catalog(), &clean_passport(), &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Clear);
        assert_eq!(outcome.score, 0);
    }

    #[tokio::test]
    async fn unknown_doc_type_is_review_no_applicable_rule() {
        let document = DocumentInput::new("utility_bill");
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert_eq!(
            outcome.raw_signals.get("reason_code").unwrap(),
            REASON_NO_APPLICABLE_RULE
        );
    }

    #[tokio::test]
    async fn single_missing_required_field_is_review() {
        let mut document = clean_passport();
        document.fields.remove("issuing_country");
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert_eq!(outcome.score, 25);
        assert!(outcome.rationale[0].contains("issuing_country"));
    }

    #[tokio::test]
    async fn two_anomalies_are_a_hit() {
        let mut document = clean_passport();
        document.fields.remove("full_name");
        document
            .fields
            .insert("issuing_country".to_string(), "G8".to_string());
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Hit);
        assert_eq!(outcome.score, 50);
    }

    #[tokio::test]
    async fn inverted_date_range_is_an_anomaly() {
        let mut document = clean_passport();
        document
            .fields
            .insert("issue_date".to_string(), "2030-01-01".to_string());
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert!(outcome.rationale[0].contains("after expiry_date"));
    }

    #[tokio::test]
    async fn metadata_modified_before_created_is_an_anomaly() {
        let document = clean_passport().with_metadata(DocumentMetadata {
            created: Some(Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()),
            modified: Some(Utc.with_ymd_and_hms(2024, 5, 9, 12, 0, 0).unwrap()),
        });
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert!(outcome.rationale[0].contains("before creation"));
    }

    #[tokio::test]
    async fn optional_field_with_bad_format_counts() {
        let document = clean_passport().with_field("mrz_line", "not an mrz");
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert!(outcome.rationale[0].contains("mrz_line"));
    }

    #[tokio::test]
    async fn blank_required_field_counts_as_missing() {
        let document = clean_passport().with_field("full_name", "   ");
        let outcome = evaluate(&catalog(), &document, &EngineConfig::default())
            .await
            .unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert!(outcome.rationale[0].contains("full_name"));
    }
}
