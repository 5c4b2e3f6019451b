//! All five categories through one engine call, plus serialization of
//! the resulting decision for the audit trail.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use proptest::prelude::*;
use serde_json::json;

use vet_catalog::{
    FraudPattern, Indicator, IndicatorCondition, InMemoryCatalog, Regulation,
    RegulationRequirement, SanctionsEntry, SanctionsListType,
};
use vet_core::{AttributeKey, CheckCategory, Entity, EntityKind, VerificationStatus};
use vet_engine::{
    DocumentInput, EngineConfig, FinancialClaims, VerificationEngine, VerificationRequest,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn seeded_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::with_builtin_document_schemas();
    catalog.add_regulation(Regulation {
        code: "kyc-individual".to_string(),
        name: "KYC for individuals".to_string(),
        jurisdiction: None,
        requirements: vec![
            RegulationRequirement::mandatory("full_name"),
            RegulationRequirement::mandatory("date_of_birth"),
            RegulationRequirement::mandatory("address"),
        ],
        identity_critical_fields: vec!["full_name".to_string()],
        is_active: true,
    });
    catalog.add_sanctions_entry(
        SanctionsEntry::new(
            "SDN-9001",
            SanctionsListType::OfacSdn,
            "NORTHERN TRADING HOUSE",
            EntityKind::Organization,
        )
        .with_country("IR"),
    );
    catalog.add_fraud_pattern(FraudPattern {
        pattern_id: "FP-NEW-ACCT".to_string(),
        name: "Fresh account, high volume".to_string(),
        category: "velocity".to_string(),
        indicators: vec![
            Indicator::new(
                AttributeKey::AccountAgeDays,
                IndicatorCondition::LessThan(30.0),
            ),
            Indicator::new(
                AttributeKey::TransactionVolume,
                IndicatorCondition::GreaterThan(100_000.0),
            ),
        ],
        min_indicator_hits: Some(2),
        risk_score: 60,
        is_active: true,
    });
    catalog
}

fn clean_request() -> VerificationRequest {
    let mut raw = BTreeMap::new();
    raw.insert("account_age_days".to_string(), json!(2_400));
    raw.insert("transaction_volume".to_string(), json!(1_200));
    VerificationRequest::new(Entity::new("Jane Roe", EntityKind::Individual).unwrap())
        .with_raw_attributes(raw)
        .with_categories(CheckCategory::all())
        .with_regulation("kyc-individual")
        .with_supplied_field("full_name", json!("Jane Roe"))
        .with_supplied_field("date_of_birth", json!("1984-06-02"))
        .with_supplied_field("address", json!("12 High St, Norwich"))
        .with_financial_claims(FinancialClaims {
            credit_score: Some(731),
            active_bankruptcy: Some(false),
            active_liens: Some(0),
        })
        .with_document(
            DocumentInput::new("passport")
                .with_field("document_number", "X1234567")
                .with_field("full_name", "JANE ROE")
                .with_field("issue_date", "2019-03-14")
                .with_field("expiry_date", "2029-03-13")
                .with_field("issuing_country", "GBR"),
        )
}

#[tokio::test]
async fn clean_entity_clears_all_five_categories() -> Result<()> {
    init_tracing();
    let engine = VerificationEngine::new(Arc::new(seeded_catalog()));
    let decision = engine.verify(clean_request()).await?;

    assert_eq!(decision.outcomes.len(), 5);
    for outcome in &decision.outcomes {
        assert_eq!(
            outcome.status,
            VerificationStatus::Clear,
            "{} was not clear: {:?}",
            outcome.category,
            outcome.rationale
        );
    }
    // Compliance contributes 100 at weight 0.10; everything else is 0.
    assert_eq!(decision.composite_score, 10);
    assert_eq!(decision.overall_status, VerificationStatus::Clear);
    Ok(())
}

#[tokio::test]
async fn outcomes_are_listed_in_canonical_category_order() -> Result<()> {
    let engine = VerificationEngine::new(Arc::new(seeded_catalog()));
    let decision = engine.verify(clean_request()).await?;

    let order: Vec<CheckCategory> = decision.outcomes.iter().map(|o| o.category).collect();
    assert_eq!(order, CheckCategory::all().to_vec());
    Ok(())
}

#[tokio::test]
async fn decision_serializes_for_the_audit_trail() -> Result<()> {
    let engine = VerificationEngine::new(Arc::new(seeded_catalog()));
    let decision = engine.verify(clean_request()).await?;

    let value = serde_json::to_value(&decision)?;
    assert_eq!(value["overall_status"], "clear");
    assert_eq!(value["risk_level"], "low");
    assert!(value["decision_id"].is_string());
    assert!(value["evaluated_at"].is_string());
    assert_eq!(value["outcomes"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["outcomes"][4]["category"], "document-forgery");
    Ok(())
}

#[tokio::test]
async fn forged_document_and_thin_file_escalate_together() -> Result<()> {
    let engine = VerificationEngine::new(Arc::new(seeded_catalog()));

    let mut request = clean_request().with_financial_claims(FinancialClaims {
        credit_score: Some(512),
        active_bankruptcy: Some(true),
        active_liens: Some(1),
    });
    request = request.with_document(
        DocumentInput::new("passport")
            .with_field("document_number", "X1234567")
            .with_field("full_name", "JANE ROE")
            .with_field("issue_date", "2030-01-01")
            .with_field("expiry_date", "2029-03-13")
            .with_field("issuing_country", "G8"),
    );
    let decision = engine.verify(request).await?;

    let financial = decision.outcome(CheckCategory::Financial).unwrap();
    assert_eq!(financial.status, VerificationStatus::Hit);
    let document = decision.outcome(CheckCategory::DocumentForgery).unwrap();
    assert_eq!(document.status, VerificationStatus::Hit);
    assert_eq!(decision.overall_status, VerificationStatus::Hit);
    Ok(())
}

proptest! {
    // The composite is a weighted mean, so it can never leave the hull
    // of the category scores.
    #[test]
    fn composite_stays_within_category_score_bounds(
        credit in 300u16..850,
        bankruptcy in any::<bool>(),
        liens in 0u32..4,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let engine = VerificationEngine::new(Arc::new(seeded_catalog()));
        let request = VerificationRequest::new(
            Entity::new("Jane Roe", EntityKind::Individual).unwrap(),
        )
        .with_category(CheckCategory::Financial)
        .with_category(CheckCategory::Compliance)
        .with_regulation("kyc-individual")
        .with_supplied_field("full_name", json!("Jane Roe"))
        .with_supplied_field("date_of_birth", json!("1984-06-02"))
        .with_supplied_field("address", json!("12 High St"))
        .with_financial_claims(FinancialClaims {
            credit_score: Some(credit),
            active_bankruptcy: Some(bankruptcy),
            active_liens: Some(liens),
        });
        let decision = runtime.block_on(engine.verify(request)).unwrap();
        let min = decision.outcomes.iter().map(|o| o.score).min().unwrap();
        let max = decision.outcomes.iter().map(|o| o.score).max().unwrap();
        prop_assert!(decision.composite_score >= min);
        prop_assert!(decision.composite_score <= max);
    }
}

#[tokio::test]
async fn custom_thresholds_change_banding() -> Result<()> {
    let engine = VerificationEngine::with_config(
        Arc::new(seeded_catalog()),
        EngineConfig {
            review_score_threshold: 5,
            ..EngineConfig::default()
        },
    );
    let decision = engine.verify(clean_request()).await?;
    // Composite of 10 now sits above the lowered review line.
    assert_eq!(decision.overall_status, VerificationStatus::Review);
    Ok(())
}
