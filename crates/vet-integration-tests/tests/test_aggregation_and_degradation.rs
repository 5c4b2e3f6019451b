//! Composite aggregation and failure-isolation scenarios.
//!
//! The two load-bearing properties:
//!
//! - hit-override: a single `hit` category forces the overall status to
//!   `hit` no matter how favorable the other categories are
//! - conservative absence: catalog outages and deadline expiries degrade
//!   to `review`, never to `clear`

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use vet_catalog::{
    Catalog, CatalogError, DocumentSchema, FraudPattern, InMemoryCatalog, Regulation,
    RegulationRequirement, SanctionsEntry, SanctionsListType,
};
use vet_core::{CheckCategory, Entity, EntityKind, VerificationStatus};
use vet_engine::{
    EngineConfig, FinancialClaims, RiskLevel, VerificationEngine, VerificationRequest,
};

struct OfflineCatalog;

#[async_trait]
impl Catalog for OfflineCatalog {
    async fn find_regulation(&self, _: &str) -> Result<Option<Regulation>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
    async fn list_sanctions_entries(
        &self,
        _: SanctionsListType,
        _: Option<&str>,
    ) -> Result<Vec<SanctionsEntry>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
    async fn list_active_fraud_patterns(
        &self,
        _: Option<&str>,
    ) -> Result<Vec<FraudPattern>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
    async fn find_document_schema(&self, _: &str) -> Result<Option<DocumentSchema>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
}

/// Catalog that never answers sanctions lookups.
struct HangingCatalog(InMemoryCatalog);

#[async_trait]
impl Catalog for HangingCatalog {
    async fn find_regulation(&self, code: &str) -> Result<Option<Regulation>, CatalogError> {
        self.0.find_regulation(code).await
    }
    async fn list_sanctions_entries(
        &self,
        list_type: SanctionsListType,
        country: Option<&str>,
    ) -> Result<Vec<SanctionsEntry>, CatalogError> {
        tokio::time::sleep(Duration::from_secs(86_400)).await;
        self.0.list_sanctions_entries(list_type, country).await
    }
    async fn list_active_fraud_patterns(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<FraudPattern>, CatalogError> {
        self.0.list_active_fraud_patterns(category).await
    }
    async fn find_document_schema(
        &self,
        doc_type: &str,
    ) -> Result<Option<DocumentSchema>, CatalogError> {
        self.0.find_document_schema(doc_type).await
    }
}

fn individual() -> Entity {
    Entity::new("Jane Roe", EntityKind::Individual).unwrap()
}

#[tokio::test]
async fn hit_overrides_excellent_sibling_scores() {
    let mut catalog = InMemoryCatalog::new();
    catalog.add_regulation(Regulation {
        code: "kyc".to_string(),
        name: "KYC".to_string(),
        jurisdiction: None,
        requirements: vec![RegulationRequirement::mandatory("full_name")],
        identity_critical_fields: vec![],
        is_active: true,
    });
    catalog.add_sanctions_entry(SanctionsEntry::new(
        "SDN-1",
        SanctionsListType::OfacSdn,
        "JANE ROE",
        EntityKind::Individual,
    ));
    let engine = VerificationEngine::new(Arc::new(catalog));

    let request = VerificationRequest::new(individual())
        .with_category(CheckCategory::Compliance)
        .with_category(CheckCategory::Sanctions)
        .with_regulation("kyc")
        .with_supplied_field("full_name", json!("Jane Roe"));
    let decision = engine.verify(request).await.unwrap();

    // Compliance is a perfect 100 and still cannot soften the hit.
    let compliance = decision.outcome(CheckCategory::Compliance).unwrap();
    assert_eq!(compliance.score, 100);
    assert_eq!(decision.overall_status, VerificationStatus::Hit);
    assert_eq!(decision.risk_level, RiskLevel::Critical);
}

#[tokio::test]
async fn weights_renormalize_over_the_requested_subset() {
    let engine = VerificationEngine::new(Arc::new(InMemoryCatalog::new()));

    // Financial only: its 0.20 weight renormalizes to 1.0, so the
    // composite equals the category score.
    let request = VerificationRequest::new(individual())
        .with_category(CheckCategory::Financial)
        .with_financial_claims(FinancialClaims {
            credit_score: Some(500),
            active_bankruptcy: Some(true),
            active_liens: None,
        });
    let decision = engine.verify(request).await.unwrap();

    let financial = decision.outcome(CheckCategory::Financial).unwrap();
    assert_eq!(financial.score, 75);
    assert_eq!(decision.composite_score, 75);
    assert_eq!(decision.overall_status, VerificationStatus::Review);
    assert_eq!(decision.risk_level, RiskLevel::High);
}

#[tokio::test]
async fn offline_catalog_degrades_every_catalog_backed_category() {
    let engine = VerificationEngine::new(Arc::new(OfflineCatalog));

    let request = VerificationRequest::new(individual())
        .with_category(CheckCategory::Sanctions)
        .with_category(CheckCategory::Fraud)
        .with_category(CheckCategory::Financial)
        .with_financial_claims(FinancialClaims::default());
    let decision = engine.verify(request).await.unwrap();

    for category in [CheckCategory::Sanctions, CheckCategory::Fraud] {
        let outcome = decision.outcome(category).unwrap();
        assert_eq!(outcome.status, VerificationStatus::Review, "{category}");
        assert_eq!(
            outcome.raw_signals.get("reason_code").unwrap(),
            "catalog_unavailable",
            "{category}"
        );
        assert_eq!(outcome.score, 50, "{category}");
    }
    // Financial runs without the catalog and is unaffected.
    assert_eq!(
        decision.outcome(CheckCategory::Financial).unwrap().status,
        VerificationStatus::Clear
    );
    assert_eq!(decision.overall_status, VerificationStatus::Review);
}

#[tokio::test(start_paused = true)]
async fn deadline_expiry_never_renders_as_clear() {
    let engine = VerificationEngine::with_config(
        Arc::new(HangingCatalog(InMemoryCatalog::new())),
        EngineConfig {
            deadline: Duration::from_secs(2),
            ..EngineConfig::default()
        },
    );

    let request = VerificationRequest::new(individual()).with_category(CheckCategory::Sanctions);
    let decision = engine.verify(request).await.unwrap();

    let sanctions = decision.outcome(CheckCategory::Sanctions).unwrap();
    assert_eq!(sanctions.status, VerificationStatus::Review);
    assert_eq!(
        sanctions.raw_signals.get("reason_code").unwrap(),
        "catalog_timeout"
    );
    assert_ne!(decision.overall_status, VerificationStatus::Clear);
}

#[tokio::test]
async fn empty_reference_data_is_review_not_clear() {
    // Reachable catalog with no entries at all.
    let engine = VerificationEngine::new(Arc::new(InMemoryCatalog::new()));

    let request = VerificationRequest::new(individual())
        .with_category(CheckCategory::Sanctions)
        .with_category(CheckCategory::Fraud);
    let decision = engine.verify(request).await.unwrap();

    for outcome in &decision.outcomes {
        assert_eq!(outcome.status, VerificationStatus::Review);
        assert_eq!(
            outcome.raw_signals.get("reason_code").unwrap(),
            "no_applicable_rule"
        );
    }
}

#[tokio::test]
async fn decision_carries_audit_identifiers() {
    let engine = VerificationEngine::new(Arc::new(InMemoryCatalog::new()));
    let request = VerificationRequest::new(individual())
        .with_category(CheckCategory::Financial)
        .with_financial_claims(FinancialClaims::default());

    let first = engine.verify(request.clone()).await.unwrap();
    let second = engine.verify(request).await.unwrap();
    assert_ne!(first.decision_id, second.decision_id);
    assert!(first.evaluated_at <= second.evaluated_at);
}
