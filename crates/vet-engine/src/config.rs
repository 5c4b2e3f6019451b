//! # Engine Configuration
//!
//! Every tunable of the engine lives here: similarity and status
//! thresholds, financial rule deltas, the per-request deadline. Defaults
//! are the documented reference values; out-of-range inputs are clamped
//! with a warning rather than rejected, so a bad config file cannot take
//! verification offline.

use std::time::Duration;

use vet_match::MatcherConfig;

/// Tunable thresholds and deltas for the verification engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Fuzzy matcher settings (similarity floor).
    pub matcher: MatcherConfig,
    /// Best-similarity threshold at which a screening result is a `hit`.
    pub sanctions_hit_threshold: f64,
    /// Maximum surviving candidates reported per screening call.
    pub top_k: usize,
    /// Fraud/composite score at which a category is `review`.
    pub review_score_threshold: u8,
    /// Fraud score at which the category is a `hit`.
    pub fraud_hit_threshold: u8,
    /// Credit scores strictly below this contribute financial risk.
    pub credit_score_floor: u16,
    /// Score delta for a sub-floor credit score.
    pub credit_delta: u8,
    /// Score delta for an active bankruptcy flag.
    pub bankruptcy_delta: u8,
    /// Score delta for at least one active lien.
    pub lien_delta: u8,
    /// Score delta per document anomaly.
    pub document_anomaly_delta: u8,
    /// Shared deadline across all fanned-out sub-evaluators.
    pub deadline: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherConfig::default(),
            sanctions_hit_threshold: 0.85,
            top_k: 5,
            review_score_threshold: 40,
            fraud_hit_threshold: 80,
            credit_score_floor: 580,
            credit_delta: 40,
            bankruptcy_delta: 35,
            lien_delta: 25,
            document_anomaly_delta: 25,
            deadline: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    /// Clamp thresholds into their valid ranges.
    ///
    /// Similarity thresholds must be in `(0.0, 1.0]`; NaN falls back to
    /// the default. Score thresholds are capped at 100. `top_k` of zero
    /// becomes 1 (a screener that can never report a candidate would
    /// silently pass everything).
    pub fn sanitized(mut self) -> Self {
        self.matcher.floor = clamp_similarity(self.matcher.floor, 0.55, "matcher.floor");
        self.sanctions_hit_threshold = clamp_similarity(
            self.sanctions_hit_threshold,
            0.85,
            "sanctions_hit_threshold",
        );
        if self.sanctions_hit_threshold < self.matcher.floor {
            tracing::warn!(
                hit = self.sanctions_hit_threshold,
                floor = self.matcher.floor,
                "hit threshold below matcher floor, raising to floor"
            );
            self.sanctions_hit_threshold = self.matcher.floor;
        }
        if self.top_k == 0 {
            tracing::warn!("top_k of 0 would suppress all candidates, using 1");
            self.top_k = 1;
        }
        self.review_score_threshold = self.review_score_threshold.min(100);
        self.fraud_hit_threshold = self.fraud_hit_threshold.min(100);
        self
    }
}

fn clamp_similarity(value: f64, default: f64, name: &str) -> f64 {
    if value.is_nan() {
        tracing::warn!(name, "NaN similarity threshold, using default {default}");
        default
    } else if value <= 0.0 {
        tracing::warn!(name, value, "similarity threshold <= 0.0, clamping to 0.01");
        0.01
    } else if value > 1.0 {
        tracing::warn!(name, value, "similarity threshold > 1.0, clamping to 1.0");
        1.0
    } else {
        value
    }
}
