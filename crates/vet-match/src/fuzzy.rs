//! # Fuzzy Identity Matcher
//!
//! Scores similarity between a query identity and a candidate identity
//! in `[0.0, 1.0]`. Name similarity is a best-of across exact equality,
//! substring containment, token-set overlap (Jaccard), and Jaro-Winkler;
//! the candidate's aliases each get the same treatment and the best
//! score wins. An exact match on any shared identifier kind forces the
//! final score to 1.0 — official identifiers are authoritative over
//! fuzzy name similarity.
//!
//! Jaro-Winkler is implemented in-crate: token overlap alone cannot see
//! transliteration variants ("AL-QAEDA" vs "AL-QA'IDA" share no token),
//! while character-level similarity scores them above the hit threshold.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use vet_core::IdentifierKind;

use crate::normalize::normalize;

/// Substring containment score, between Jaccard and exact.
const SUBSTRING_SCORE: f64 = 0.9;
/// Winkler prefix bonus weight.
const WINKLER_PREFIX_WEIGHT: f64 = 0.1;
/// Maximum common-prefix length the Winkler bonus considers.
const WINKLER_MAX_PREFIX: usize = 4;

/// Matcher configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Minimum similarity for a candidate to be reported at all.
    /// Sub-floor scores mean "no candidate", never "weak candidate".
    pub floor: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { floor: 0.55 }
    }
}

impl MatcherConfig {
    /// Whether a similarity score clears the reporting floor.
    pub fn passes_floor(&self, similarity: f64) -> bool {
        similarity >= self.floor
    }
}

/// An identity in canonical comparison form.
///
/// Construction normalizes the name, every alias, and every identifier
/// value once, so repeated scoring against many candidates does not
/// re-normalize the query.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedIdentity {
    /// Canonical name.
    pub name: String,
    /// Canonical aliases.
    pub aliases: Vec<String>,
    /// Identifier values, uppercased and trimmed, keyed by kind.
    pub identifiers: BTreeMap<IdentifierKind, String>,
}

impl NormalizedIdentity {
    /// Normalize a raw identity.
    pub fn new<S: AsRef<str>>(
        name: &str,
        aliases: &[S],
        identifiers: &BTreeMap<IdentifierKind, String>,
    ) -> Self {
        let identifiers = identifiers
            .iter()
            .map(|(kind, value)| (*kind, value.trim().to_uppercase()))
            .filter(|(_, value)| !value.is_empty())
            .collect();
        Self {
            name: normalize(name),
            aliases: aliases
                .iter()
                .map(|a| normalize(a.as_ref()))
                .filter(|a| !a.is_empty())
                .collect(),
            identifiers,
        }
    }
}

/// How the winning similarity was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Exact shared official identifier.
    Identifier,
    /// Exact primary-name equality after normalization.
    ExactName,
    /// Best score came from one of the candidate's aliases.
    Alias,
    /// Fuzzy primary-name similarity.
    FuzzyName,
}

/// The result of scoring one query against one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityMatch {
    /// Final similarity in `[0.0, 1.0]`.
    pub similarity: f64,
    /// How the winning score was obtained.
    pub match_type: MatchType,
    /// Which components matched: `"name"`, `"alias:<alias>"`, or
    /// `"identifier:<kind>"`.
    pub matched_fields: Vec<String>,
    /// Whether an exact identifier match forced the score to 1.0.
    pub identifier_exact: bool,
}

/// A screening candidate above the floor. Transient: created per
/// screening call and discarded once the response is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    /// Catalog identifier of the matched entry.
    pub source_entry_id: String,
    /// Similarity score in `[0.0, 1.0]`.
    pub similarity_score: f64,
    /// How the winning score was obtained.
    pub match_type: MatchType,
    /// Matched name/alias/identifier components.
    pub matched_fields: Vec<String>,
    /// Whether the match was anchored by an exact identifier.
    pub identifier_exact: bool,
}

/// Score a query identity against a candidate identity.
pub fn score(query: &NormalizedIdentity, candidate: &NormalizedIdentity) -> IdentityMatch {
    let mut matched_fields = Vec::new();

    let name_score = name_similarity(&query.name, &candidate.name);
    let mut best = name_score;
    let mut alias_won = false;
    if name_score > 0.0 {
        matched_fields.push("name".to_string());
    }

    for alias in &candidate.aliases {
        let alias_score = name_similarity(&query.name, alias);
        if alias_score > best {
            best = alias_score;
            alias_won = true;
        }
        if alias_score > 0.0 {
            matched_fields.push(format!("alias:{alias}"));
        }
    }

    // Identifier dominance: an exact shared identifier is authoritative.
    let mut identifier_exact = false;
    for (kind, value) in &query.identifiers {
        if let Some(candidate_value) = candidate.identifiers.get(kind) {
            if !value.is_empty() && value == candidate_value {
                identifier_exact = true;
                matched_fields.push(format!("identifier:{kind}"));
            }
        }
    }
    if identifier_exact {
        best = 1.0;
    }

    let match_type = if identifier_exact {
        MatchType::Identifier
    } else if alias_won {
        MatchType::Alias
    } else if query.name == candidate.name && !query.name.is_empty() {
        MatchType::ExactName
    } else {
        MatchType::FuzzyName
    };

    IdentityMatch {
        similarity: best,
        match_type,
        matched_fields,
        identifier_exact,
    }
}

/// Best-of name similarity between two canonical strings.
fn name_similarity(query: &str, target: &str) -> f64 {
    if query.is_empty() || target.is_empty() {
        return 0.0;
    }
    if query == target {
        return 1.0;
    }

    let mut best: f64 = 0.0;

    // Substring containment (only for meaningful lengths).
    if query.len() >= 3 && target.len() >= 3 && (target.contains(query) || query.contains(target)) {
        best = SUBSTRING_SCORE;
    }

    best = best.max(token_jaccard(query, target));
    best.max(jaro_winkler(query, target))
}

/// Token-set overlap ratio (Jaccard similarity).
fn token_jaccard(a: &str, b: &str) -> f64 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let overlap = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    overlap as f64 / union as f64
}

/// Jaro similarity.
fn jaro(s1: &str, s2: &str) -> f64 {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && ca == b[j] {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut j = 0usize;
    for (i, &ca) in a.iter().enumerate() {
        if a_matched[i] {
            while !b_matched[j] {
                j += 1;
            }
            if ca != b[j] {
                transpositions += 1;
            }
            j += 1;
        }
    }

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions as f64 / 2.0) / m) / 3.0
}

/// Jaro-Winkler similarity: Jaro plus a bonus for a shared prefix.
fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    let jaro_score = jaro(s1, s2);
    let prefix = s1
        .chars()
        .zip(s2.chars())
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count();
    jaro_score + prefix as f64 * WINKLER_PREFIX_WEIGHT * (1.0 - jaro_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn identity(name: &str) -> NormalizedIdentity {
        NormalizedIdentity::new::<&str>(name, &[], &BTreeMap::new())
    }

    fn identity_with_ids(
        name: &str,
        ids: &[(IdentifierKind, &str)],
    ) -> NormalizedIdentity {
        let map: BTreeMap<IdentifierKind, String> = ids
            .iter()
            .map(|(k, v)| (*k, v.to_string()))
            .collect();
        NormalizedIdentity::new::<&str>(name, &[], &map)
    }

    #[test]
    fn exact_name_scores_one() {
        let result = score(&identity("Acme Corp"), &identity("ACME CORP."));
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.match_type, MatchType::ExactName);
        assert_eq!(result.matched_fields, vec!["name".to_string()]);
    }

    #[test]
    fn disjoint_names_score_low() {
        let result = score(&identity("Totally Different Inc"), &identity("Acme Corp"));
        assert!(result.similarity < 0.55, "got {}", result.similarity);
    }

    #[test]
    fn transliteration_variant_clears_hit_threshold() {
        let entry = NormalizedIdentity::new(
            "AL-QAEDA ORGANIZATION",
            &["AL-QA'IDA"],
            &BTreeMap::new(),
        );
        let result = score(&identity("AL-QAEDA"), &entry);
        assert!(
            result.similarity >= 0.85,
            "alias transliteration should clear 0.85, got {}",
            result.similarity
        );
    }

    #[test]
    fn best_alias_beats_weak_primary_name() {
        let entry = NormalizedIdentity::new(
            "Global Holdings 2209",
            &["Acme Corporation"],
            &BTreeMap::new(),
        );
        let via_alias = score(&identity("Acme Corporation"), &entry);
        assert_eq!(via_alias.similarity, 1.0);
        assert_eq!(via_alias.match_type, MatchType::Alias);
        assert!(via_alias
            .matched_fields
            .iter()
            .any(|f| f.starts_with("alias:")));
    }

    #[test]
    fn identifier_dominance_forces_one() {
        let query = identity_with_ids("John Smith", &[(IdentifierKind::Passport, "x1234567")]);
        let entry = identity_with_ids(
            "Completely Unrelated Name",
            &[(IdentifierKind::Passport, "X1234567")],
        );
        let result = score(&query, &entry);
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.match_type, MatchType::Identifier);
        assert!(result.identifier_exact);
        assert!(result
            .matched_fields
            .contains(&"identifier:passport".to_string()));
    }

    #[test]
    fn differing_identifiers_do_not_force_one() {
        let query = identity_with_ids("John Smith", &[(IdentifierKind::TaxId, "111")]);
        let entry = identity_with_ids("John Smith", &[(IdentifierKind::TaxId, "222")]);
        let result = score(&query, &entry);
        // Names still match exactly; only the forced-1.0 path is off.
        assert!(!result.identifier_exact);
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn substring_containment_scores_high() {
        let result = score(
            &identity("International Trading"),
            &identity("International Trading Company Ltd"),
        );
        assert!(result.similarity >= 0.9, "got {}", result.similarity);
    }

    #[test]
    fn token_overlap_partial() {
        let s = token_jaccard("JOHN MICHAEL SMITH", "JOHN SMITH");
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn jaro_winkler_known_pair() {
        let jw = jaro_winkler("AL-QAEDA", "AL-QAIDA");
        assert!(jw > 0.9, "got {jw}");
    }

    #[test]
    fn empty_names_score_zero() {
        assert_eq!(name_similarity("", "ACME"), 0.0);
        assert_eq!(name_similarity("ACME", ""), 0.0);
    }

    proptest! {
        #[test]
        fn similarity_is_bounded(a in "[A-Z ]{0,20}", b in "[A-Z ]{0,20}") {
            let result = score(&identity(&a), &identity(&b));
            prop_assert!((0.0..=1.0).contains(&result.similarity));
        }

        #[test]
        fn identical_inputs_score_one(a in "[A-Z]{1,12}( [A-Z]{1,12}){0,3}") {
            let result = score(&identity(&a), &identity(&a));
            prop_assert_eq!(result.similarity, 1.0);
        }
    }
}
