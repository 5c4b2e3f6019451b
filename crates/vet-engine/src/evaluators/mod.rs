//! # Category Evaluators
//!
//! One module per check category. Every evaluator has the same shape:
//! take the validated request plus the catalog, return a
//! [`VerificationOutcome`](crate::outcome::VerificationOutcome) for its
//! category, and propagate [`CatalogError`](vet_catalog::CatalogError)
//! untouched so the engine can degrade the category.
//!
//! Shared conventions:
//!
//! - Reference data that does not exist (unknown regulation, empty
//!   watchlist, no patterns, unknown schema) produces a `review` outcome
//!   with the `no_applicable_rule` reason code. Absence of rules is not
//!   absence of risk.
//! - Scores are category-local. Compliance scores measure coverage
//!   (high is good); every other category scores risk (high is bad).
//!   The aggregator averages them as-is, so readers of the composite
//!   should interpret each category's score through its own outcome.

pub mod compliance;
pub mod document;
pub mod financial;
pub mod fraud;
pub mod sanctions;
