//! # Verification Status Lattice
//!
//! [`VerificationStatus`] is the three-state result every evaluator
//! reports: `clear`, `review`, or `hit`. Statuses form a severity
//! lattice:
//!
//! ```text
//! Ordering (best → worst): Clear < Review < Hit
//!
//! escalate(a, b) = max(a, b) — pessimistic (strongest signal wins)
//! ```
//!
//! `Hit` is absorbing under [`escalate`](VerificationStatus::escalate):
//! a single hit anywhere dominates any number of clear results. The
//! aggregator relies on this to enforce the hit-override rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Per-category (and overall) verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// No adverse signal found.
    Clear,
    /// Ambiguous or incomplete signal — requires human review.
    Review,
    /// Strong adverse signal — confirmed match or violation.
    Hit,
}

impl VerificationStatus {
    /// Severity ordering value. Higher is worse.
    fn severity(self) -> u8 {
        match self {
            Self::Clear => 0,
            Self::Review => 1,
            Self::Hit => 2,
        }
    }

    /// Pessimistic combination — returns the more severe of the two.
    ///
    /// `Hit` is absorbing: `escalate(x, Hit) == Hit` for all `x`. This is
    /// the invariant behind the aggregator's hit-override rule: a strong
    /// signal must never be averaged away.
    pub fn escalate(self, other: Self) -> Self {
        if self.severity() >= other.severity() {
            self
        } else {
            other
        }
    }

    /// Whether this status allows the entity to proceed without review.
    pub fn is_clear(self) -> bool {
        matches!(self, Self::Clear)
    }

    /// Stable string form used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Review => "review",
            Self::Hit => "hit",
        }
    }
}

impl PartialOrd for VerificationStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VerificationStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Self::Clear),
            "review" => Ok(Self::Review),
            "hit" => Ok(Self::Hit),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalate_hit_is_absorbing() {
        for status in [
            VerificationStatus::Clear,
            VerificationStatus::Review,
            VerificationStatus::Hit,
        ] {
            assert_eq!(
                status.escalate(VerificationStatus::Hit),
                VerificationStatus::Hit
            );
            assert_eq!(
                VerificationStatus::Hit.escalate(status),
                VerificationStatus::Hit
            );
        }
    }

    #[test]
    fn escalate_review_beats_clear() {
        assert_eq!(
            VerificationStatus::Clear.escalate(VerificationStatus::Review),
            VerificationStatus::Review
        );
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(VerificationStatus::Clear < VerificationStatus::Review);
        assert!(VerificationStatus::Review < VerificationStatus::Hit);
    }

    #[test]
    fn serde_snake_case_roundtrip() {
        let json = serde_json::to_string(&VerificationStatus::Review).unwrap();
        assert_eq!(json, "\"review\"");
        let back: VerificationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VerificationStatus::Review);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("escalated".parse::<VerificationStatus>().is_err());
    }
}
