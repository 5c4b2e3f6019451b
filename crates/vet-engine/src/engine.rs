//! # Verification Engine
//!
//! The orchestrator: validates the request, fans out one task per
//! requested category under a shared deadline, and aggregates whatever
//! comes back. Category failures never cross category boundaries — a
//! catalog outage or deadline expiry degrades the affected category to
//! `review` while its siblings complete normally.

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::Instant;

use vet_catalog::{Catalog, CatalogError};
use vet_core::CheckCategory;

use crate::aggregate::aggregate;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::evaluators;
use crate::outcome::{
    CompositeDecision, VerificationOutcome, REASON_CATALOG_TIMEOUT, REASON_CATALOG_UNAVAILABLE,
    REASON_EVALUATOR_FAILED, REASON_NO_APPLICABLE_RULE,
};
use crate::request::VerificationRequest;

/// Entity verification engine over a reference catalog.
pub struct VerificationEngine {
    catalog: Arc<dyn Catalog>,
    config: EngineConfig,
}

impl VerificationEngine {
    /// Engine with default configuration.
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Engine with explicit configuration. Out-of-range thresholds are
    /// clamped, not rejected.
    pub fn with_config(catalog: Arc<dyn Catalog>, config: EngineConfig) -> Self {
        Self {
            catalog,
            config: config.sanitized(),
        }
    }

    /// The active (sanitized) configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Verify one entity across the requested categories.
    ///
    /// The only error is [`EngineError::InvalidInput`]; every
    /// post-validation failure becomes a degraded category outcome
    /// inside the returned decision.
    pub async fn verify(
        &self,
        request: VerificationRequest,
    ) -> Result<CompositeDecision, EngineError> {
        request.validate()?;
        let request = Arc::new(request);
        let deadline = Instant::now() + self.config.deadline;

        let mut tasks = JoinSet::new();
        for category in request.categories.iter().copied() {
            let catalog = Arc::clone(&self.catalog);
            let request = Arc::clone(&request);
            let config = self.config;
            tasks.spawn(async move {
                let result =
                    tokio::time::timeout_at(deadline, run_category(category, catalog, request, config))
                        .await;
                (category, result)
            });
        }

        let mut outcomes: Vec<VerificationOutcome> = Vec::with_capacity(request.categories.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Ok(Ok(outcome)))) => outcomes.push(outcome),
                Ok((category, Ok(Err(err)))) => {
                    tracing::warn!(%category, error = %err, "catalog unavailable, degrading category");
                    outcomes.push(VerificationOutcome::degraded(
                        category,
                        REASON_CATALOG_UNAVAILABLE,
                        err.to_string(),
                    ));
                }
                Ok((category, Err(_elapsed))) => {
                    tracing::warn!(
                        %category,
                        deadline_ms = self.config.deadline.as_millis() as u64,
                        "deadline expired, degrading category"
                    );
                    outcomes.push(VerificationOutcome::degraded(
                        category,
                        REASON_CATALOG_TIMEOUT,
                        "evaluation deadline exceeded",
                    ));
                }
                Err(join_err) => {
                    tracing::error!(error = %join_err, "evaluator task failed to complete");
                }
            }
        }
        // A panicked task loses its category tag; backfill so every
        // requested category still has an outcome.
        for category in request.categories.iter().copied() {
            if !outcomes.iter().any(|o| o.category == category) {
                outcomes.push(VerificationOutcome::degraded(
                    category,
                    REASON_EVALUATOR_FAILED,
                    "evaluator task did not complete",
                ));
            }
        }

        let decision = aggregate(outcomes, &self.config);
        tracing::info!(
            decision_id = %decision.decision_id,
            entity = %request.entity.name,
            status = %decision.overall_status,
            composite_score = decision.composite_score,
            "verification decision"
        );
        Ok(decision)
    }
}

/// Run one category evaluator against the shared request.
async fn run_category(
    category: CheckCategory,
    catalog: Arc<dyn Catalog>,
    request: Arc<VerificationRequest>,
    config: EngineConfig,
) -> Result<VerificationOutcome, CatalogError> {
    match category {
        CheckCategory::Compliance => {
            evaluators::compliance::evaluate(catalog.as_ref(), &request).await
        }
        CheckCategory::Sanctions => {
            evaluators::sanctions::evaluate(catalog.as_ref(), &request, &config).await
        }
        CheckCategory::Financial => match &request.financial_claims {
            Some(claims) => Ok(evaluators::financial::evaluate(claims, &config)),
            // Unreachable after validation; degrade rather than panic.
            None => Ok(VerificationOutcome::degraded(
                category,
                REASON_NO_APPLICABLE_RULE,
                "no financial claims supplied",
            )),
        },
        CheckCategory::Fraud => evaluators::fraud::evaluate(catalog.as_ref(), &request, &config).await,
        CheckCategory::DocumentForgery => match &request.document {
            Some(document) => {
                evaluators::document::evaluate(catalog.as_ref(), document, &config).await
            }
            None => Ok(VerificationOutcome::degraded(
                category,
                REASON_NO_APPLICABLE_RULE,
                "no document supplied",
            )),
        },
    }
}
