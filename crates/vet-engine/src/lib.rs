//! # vet-engine — Entity Verification & Risk Scoring
//!
//! Takes a described entity plus a set of requested check categories,
//! evaluates it against the reference catalogs (regulations, watchlists,
//! fraud patterns, document schemas), and produces one composite,
//! explainable risk decision.
//!
//! ## Pipeline
//!
//! ```text
//! VerificationRequest
//!   │  validate (InvalidInput is the only fatal error)
//!   ▼
//! fan-out: one task per requested category, shared deadline
//!   ├─ compliance  ── regulation requirement coverage
//!   ├─ sanctions   ── fuzzy watchlist screening
//!   ├─ financial   ── declarative financial rules
//!   ├─ fraud       ── indicator pattern matching
//!   └─ document    ── structural forensics
//!   ▼
//! aggregate: weighted composite + hit-override → CompositeDecision
//! ```
//!
//! ## Failure Isolation
//!
//! A catalog failure or deadline expiry inside one category degrades
//! that category's outcome to `review` with a `data unavailable`
//! rationale; sibling categories are unaffected. Missing data never
//! renders as `clear`.

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluators;
pub mod outcome;
pub mod request;

pub use config::EngineConfig;
pub use engine::VerificationEngine;
pub use error::EngineError;
pub use outcome::{CompositeDecision, RiskLevel, VerificationOutcome};
pub use request::{DocumentInput, DocumentMetadata, FinancialClaims, VerificationRequest};
