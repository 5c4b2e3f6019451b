//! # vet-core — Verification Domain Primitives
//!
//! Shared vocabulary for the entity verification engine: the [`Entity`]
//! under verification, closed identifier/attribute key sets, the five
//! [`CheckCategory`] variants, and the [`VerificationStatus`] severity
//! lattice that every evaluator reports in.
//!
//! ## Design Rules
//!
//! - Identifier and attribute keys are **closed enums**, never free-form
//!   strings. Rule definitions reference a fixed, enumerable key set, so
//!   unrecognized input keys are ignored explicitly rather than reflected
//!   over.
//! - `VerificationStatus` orders by severity (`clear < review < hit`).
//!   Combining statuses uses [`VerificationStatus::escalate`] — the
//!   pessimistic maximum — so a strong signal is never diluted.
//! - All public types serialize with `serde` for audit output.

pub mod attributes;
pub mod category;
pub mod entity;
pub mod error;
pub mod status;

pub use attributes::{AttributeKey, AttributeMap};
pub use category::CheckCategory;
pub use entity::{Entity, EntityKind, IdentifierKind};
pub use error::ValidationError;
pub use status::VerificationStatus;
