//! # Sanctions Screening Evaluator
//!
//! Screens the entity against the requested watchlists with the fuzzy
//! matcher. Candidates below the similarity floor are discarded, the
//! survivors are ranked globally across all lists, and only the top K
//! are reported.
//!
//! Status: best similarity at or above the hit threshold → `hit`; any
//! surviving candidate → `review`; none → `clear`. Score is the best
//! similarity on the 0-100 scale. An empty union of requested lists is
//! not a clean bill — it degrades to `review` with `no_applicable_rule`.

use serde_json::json;

use vet_catalog::{Catalog, CatalogError, SanctionsEntry, SanctionsListType};
use vet_core::{CheckCategory, VerificationStatus};
use vet_match::{score, MatchCandidate, NormalizedIdentity};

use crate::config::EngineConfig;
use crate::outcome::{VerificationOutcome, REASON_NO_APPLICABLE_RULE};
use crate::request::VerificationRequest;

pub async fn evaluate(
    catalog: &dyn Catalog,
    request: &VerificationRequest,
    config: &EngineConfig,
) -> Result<VerificationOutcome, CatalogError> {
    let query = NormalizedIdentity::new::<&str>(
        &request.entity.name,
        &[],
        &request.entity.identifiers,
    );
    let country = request.entity.country.as_deref();

    let mut total_entries = 0usize;
    let mut candidates: Vec<(MatchCandidate, String, SanctionsListType)> = Vec::new();
    let lists = request.effective_list_types();

    for list_type in lists.iter().copied() {
        let entries = catalog.list_sanctions_entries(list_type, country).await?;
        total_entries += entries.len();
        for entry in &entries {
            if let Some(candidate) = screen_entry(&query, entry, config) {
                candidates.push((candidate, entry.name.clone(), list_type));
            }
        }
    }

    if total_entries == 0 {
        return Ok(VerificationOutcome::degraded(
            CheckCategory::Sanctions,
            REASON_NO_APPLICABLE_RULE,
            "no watchlist entries available for the requested lists",
        ));
    }

    // Rank globally across lists: best similarity first, identifier
    // anchors break ties, catalog iteration order breaks the rest
    // (sort_by is stable).
    candidates.sort_by(|(a, _, _), (b, _, _)| {
        b.similarity_score
            .total_cmp(&a.similarity_score)
            .then(b.identifier_exact.cmp(&a.identifier_exact))
    });
    candidates.truncate(config.top_k);

    let best = candidates.first().map(|(c, _, _)| c.similarity_score);
    let status = match best {
        Some(similarity) if similarity >= config.sanctions_hit_threshold => {
            VerificationStatus::Hit
        }
        Some(_) => VerificationStatus::Review,
        None => VerificationStatus::Clear,
    };
    let score_value = best.map(|s| (s * 100.0).round() as u8).unwrap_or(0);

    let mut outcome = VerificationOutcome::new(CheckCategory::Sanctions, status, score_value);
    if candidates.is_empty() {
        outcome.push_rationale(format!(
            "no watchlist match above similarity floor {:.2}",
            config.matcher.floor
        ));
    }
    for (candidate, entry_name, list_type) in &candidates {
        outcome.push_rationale(format!(
            "{entry_name} ({}, {list_type}) similarity {:.2}",
            candidate.source_entry_id, candidate.similarity_score
        ));
    }
    outcome.record_signal(
        "candidates",
        json!(candidates.iter().map(|(c, _, _)| c).collect::<Vec<_>>()),
    );
    outcome.record_signal("entries_screened", json!(total_entries));
    outcome.record_signal("lists_checked", json!(lists));
    Ok(outcome)
}

/// Score one entry, keeping it only when it clears the floor.
fn screen_entry(
    query: &NormalizedIdentity,
    entry: &SanctionsEntry,
    config: &EngineConfig,
) -> Option<MatchCandidate> {
    let candidate_identity =
        NormalizedIdentity::new(&entry.name, &entry.aliases, &entry.identifiers);
    let result = score(query, &candidate_identity);
    if !config.matcher.passes_floor(result.similarity) {
        return None;
    }
    Some(MatchCandidate {
        source_entry_id: entry.entry_id.clone(),
        similarity_score: result.similarity,
        match_type: result.match_type,
        matched_fields: result.matched_fields,
        identifier_exact: result.identifier_exact,
    })
}
