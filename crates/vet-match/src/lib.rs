//! # vet-match — Identity Normalization & Fuzzy Matching
//!
//! Canonicalizes entity names for comparison and scores similarity
//! between a query identity and catalog identities.
//!
//! ## Matching Model
//!
//! ```text
//! score = max(name_score, best_alias_score)
//! if any shared identifier kind has an equal normalized value:
//!     score = 1.0   (identifiers are authoritative over name similarity)
//! ```
//!
//! Name similarity itself is a best-of across exact match, substring
//! containment, token-set overlap, and Jaro-Winkler — transliteration
//! variants ("AL-QAEDA" / "AL-QA'IDA") must score high even when token
//! sets are disjoint.
//!
//! Scores below the configured floor are **not** low-confidence
//! candidates; callers must treat them as no candidate at all.

pub mod fuzzy;
pub mod normalize;

pub use fuzzy::{score, IdentityMatch, MatchCandidate, MatchType, MatcherConfig, NormalizedIdentity};
pub use normalize::normalize;
